//! Store repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{Store, StoreOwnership};
use crate::errors::AppResult;
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Store>>;

    /// Store owned by the given merchant, if any
    async fn find_by_merchant(&self, merchant_id: i32) -> AppResult<Option<Store>>;

    /// One page of stores ordered by id, plus the total count
    async fn list(&self, page: PageRequest) -> AppResult<(Vec<Store>, u64)>;
}

/// Concrete implementation of StoreRepository
pub struct StoreTable {
    db: DatabaseConnection,
}

impl StoreTable {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepository for StoreTable {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Store>> {
        query::find_by_id(&self.db, id).await
    }

    async fn find_by_merchant(&self, merchant_id: i32) -> AppResult<Option<Store>> {
        query::find_by_merchant(&self.db, merchant_id).await
    }

    async fn list(&self, page: PageRequest) -> AppResult<(Vec<Store>, u64)> {
        query::list(&self.db, page).await
    }
}

#[async_trait]
impl StoreOwnership for dyn StoreRepository {
    async fn merchant_store_id(&self, merchant_id: i32) -> AppResult<Option<i32>> {
        Ok(self.find_by_merchant(merchant_id).await?.map(|store| store.id))
    }
}

/// Statements shared by the pooled and transactional repositories
pub(crate) mod query {
    use chrono::Utc;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
        QueryOrder, QuerySelect, Set,
    };

    use super::super::entities::store::{self, ActiveModel, Entity as StoreEntity};
    use crate::domain::Store;
    use crate::errors::AppResult;
    use crate::types::{PageRequest, SortDirection};

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Store>> {
        Ok(StoreEntity::find_by_id(id).one(db).await?.map(Store::from))
    }

    pub async fn find_by_merchant<C: ConnectionTrait>(
        db: &C,
        merchant_id: i32,
    ) -> AppResult<Option<Store>> {
        Ok(StoreEntity::find()
            .filter(store::Column::MerchantId.eq(merchant_id))
            .one(db)
            .await?
            .map(Store::from))
    }

    pub async fn merchant_store_id<C: ConnectionTrait>(
        db: &C,
        merchant_id: i32,
    ) -> AppResult<Option<i32>> {
        let id = StoreEntity::find()
            .select_only()
            .column(store::Column::Id)
            .filter(store::Column::MerchantId.eq(merchant_id))
            .into_tuple::<i32>()
            .one(db)
            .await?;
        Ok(id)
    }

    pub async fn list<C: ConnectionTrait>(db: &C, page: PageRequest) -> AppResult<(Vec<Store>, u64)> {
        let select = match page.sort {
            SortDirection::Asc => StoreEntity::find().order_by_asc(store::Column::Id),
            SortDirection::Desc => StoreEntity::find().order_by_desc(store::Column::Id),
        };

        let paginator = select.paginate(db, page.page_size);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page_index()).await?;

        Ok((models.into_iter().map(Store::from).collect(), total))
    }

    pub async fn create<C: ConnectionTrait>(db: &C, name: String, merchant_id: i32) -> AppResult<Store> {
        let active_model = ActiveModel {
            name: Set(name),
            merchant_id: Set(merchant_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(db).await?;
        Ok(Store::from(model))
    }
}
