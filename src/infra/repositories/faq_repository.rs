//! FAQ repository implementation.
//!
//! Reads always return FAQs hydrated with their translations (insertion
//! order) and category. Listing turns a [`VisibilityFilter`] into a SQL
//! predicate so pages and totals only ever count visible rows.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{Faq, VisibilityFilter};
use crate::errors::AppResult;
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Faq>>;

    /// One page of visible FAQs, optionally restricted to those with a
    /// translation whose question or answer contains `search`
    async fn list(
        &self,
        filter: VisibilityFilter,
        search: Option<String>,
        page: PageRequest,
    ) -> AppResult<(Vec<Faq>, u64)>;

    /// Every FAQ of the store plus every global FAQ, newest first
    async fn list_for_store(&self, store_id: i32) -> AppResult<Vec<Faq>>;
}

/// Concrete implementation of FaqRepository
pub struct FaqTable {
    db: DatabaseConnection,
}

impl FaqTable {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FaqRepository for FaqTable {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Faq>> {
        query::find_by_id(&self.db, id).await
    }

    async fn list(
        &self,
        filter: VisibilityFilter,
        search: Option<String>,
        page: PageRequest,
    ) -> AppResult<(Vec<Faq>, u64)> {
        query::list(&self.db, filter, search.as_deref(), page).await
    }

    async fn list_for_store(&self, store_id: i32) -> AppResult<Vec<Faq>> {
        query::list_for_store(&self.db, store_id).await
    }
}

/// Statements shared by the pooled and transactional repositories
pub(crate) mod query {
    use std::collections::HashMap;

    use sea_orm::sea_query::{Expr, Func, Query};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
        QueryFilter, QueryOrder, Set,
    };

    use super::super::contains_pattern;
    use super::super::entities::{category, faq, store, translation};
    use super::super::translation_repository::query as translations;
    use crate::domain::{Category, Faq, Scope, Translation, TranslationInput, VisibilityFilter};
    use crate::errors::{AppError, AppResult};
    use crate::types::{PageRequest, SortDirection};

    /// SQL form of a visibility filter; `None` means unrestricted
    pub(crate) fn visibility_condition(filter: VisibilityFilter) -> Option<Condition> {
        match filter {
            VisibilityFilter::All => None,
            VisibilityFilter::GlobalOnly => {
                Some(Condition::all().add(faq::Column::IsGlobal.eq(true)))
            }
            VisibilityFilter::GlobalOrMerchantStores(merchant_id) => {
                let owned_stores = Query::select()
                    .column(store::Column::Id)
                    .from(store::Entity)
                    .and_where(store::Column::MerchantId.eq(merchant_id))
                    .to_owned();

                Some(
                    Condition::any()
                        .add(faq::Column::IsGlobal.eq(true))
                        .add(faq::Column::StoreId.in_subquery(owned_stores)),
                )
            }
        }
    }

    /// FAQ ids having a translation that matches `term`, case-insensitively
    fn matching_faq_ids(term: &str) -> sea_orm::sea_query::SelectStatement {
        Query::select()
            .column(translation::Column::FaqId)
            .from(translation::Entity)
            .cond_where(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(translation::Column::Question))).like(contains_pattern(term)))
                    .add(Expr::expr(Func::lower(Expr::col(translation::Column::Answer))).like(contains_pattern(term))),
            )
            .to_owned()
    }

    /// Attach translations and categories to a batch of FAQ rows
    async fn hydrate<C: ConnectionTrait>(db: &C, models: Vec<faq::Model>) -> AppResult<Vec<Faq>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let faq_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut category_ids: Vec<i32> = models.iter().map(|m| m.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let mut by_faq: HashMap<i32, Vec<Translation>> = HashMap::new();
        for t in translations::list_for_faqs(db, faq_ids).await? {
            by_faq.entry(t.faq_id).or_default().push(t);
        }

        let categories: HashMap<i32, Category> = category::Entity::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, Category::from(m)))
            .collect();

        models
            .into_iter()
            .map(|m| {
                Ok(Faq {
                    id: m.id,
                    category_id: m.category_id,
                    scope: Scope::from_columns(m.is_global, m.store_id)?,
                    category: categories.get(&m.category_id).cloned(),
                    translations: by_faq.remove(&m.id).unwrap_or_default(),
                })
            })
            .collect()
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Faq>> {
        let Some(model) = faq::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(hydrate(db, vec![model]).await?.pop())
    }

    pub async fn list<C: ConnectionTrait>(
        db: &C,
        filter: VisibilityFilter,
        search: Option<&str>,
        page: PageRequest,
    ) -> AppResult<(Vec<Faq>, u64)> {
        let mut select = faq::Entity::find();

        if let Some(condition) = visibility_condition(filter) {
            select = select.filter(condition);
        }
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            select = select.filter(faq::Column::Id.in_subquery(matching_faq_ids(term)));
        }
        select = match page.sort {
            SortDirection::Asc => select.order_by_asc(faq::Column::Id),
            SortDirection::Desc => select.order_by_desc(faq::Column::Id),
        };

        let paginator = select.paginate(db, page.page_size);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page_index()).await?;

        Ok((hydrate(db, models).await?, total))
    }

    pub async fn list_for_store<C: ConnectionTrait>(db: &C, store_id: i32) -> AppResult<Vec<Faq>> {
        let models = faq::Entity::find()
            .filter(
                Condition::any()
                    .add(faq::Column::StoreId.eq(store_id))
                    .add(faq::Column::IsGlobal.eq(true)),
            )
            .order_by_desc(faq::Column::Id)
            .all(db)
            .await?;

        hydrate(db, models).await
    }

    /// Insert the FAQ row and its translations; returns the new id
    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        category_id: i32,
        scope: Scope,
        translations_in: Vec<TranslationInput>,
    ) -> AppResult<i32> {
        let model = faq::ActiveModel {
            category_id: Set(category_id),
            store_id: Set(scope.store_id()),
            is_global: Set(scope.is_global()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        translations::insert_many(db, model.id, translations_in).await?;
        Ok(model.id)
    }

    pub async fn set_category<C: ConnectionTrait>(db: &C, id: i32, category_id: i32) -> AppResult<()> {
        let result = faq::Entity::update_many()
            .col_expr(faq::Column::CategoryId, Expr::value(category_id))
            .filter(faq::Column::Id.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::FaqNotFound);
        }
        Ok(())
    }

    /// Remove the FAQ's translations, then the FAQ
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        translations::delete_for_faq(db, id).await?;
        let result = faq::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::FaqNotFound);
        }
        Ok(())
    }
}
