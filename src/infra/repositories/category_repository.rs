//! Category repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::Category;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id, optionally filtered by a
    /// case-insensitive substring of the name
    async fn list(&self, search: Option<String>) -> AppResult<Vec<Category>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>>;

    async fn create(&self, name: String) -> AppResult<Category>;

    /// Rename a category; `None` if it does not exist
    async fn update(&self, id: i32, name: String) -> AppResult<Option<Category>>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of CategoryRepository
pub struct CategoryTable {
    db: DatabaseConnection,
}

impl CategoryTable {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryTable {
    async fn list(&self, search: Option<String>) -> AppResult<Vec<Category>> {
        query::list(&self.db, search.as_deref()).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        query::find_by_id(&self.db, id).await
    }

    async fn create(&self, name: String) -> AppResult<Category> {
        query::create(&self.db, name).await
    }

    async fn update(&self, id: i32, name: String) -> AppResult<Option<Category>> {
        query::update(&self.db, id, name).await
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        query::delete(&self.db, id).await
    }
}

/// Statements shared by the pooled and transactional repositories
pub(crate) mod query {
    use sea_orm::sea_query::{Expr, Func};
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

    use super::super::contains_pattern;
    use super::super::entities::category::{self, ActiveModel, Entity as CategoryEntity};
    use crate::domain::Category;
    use crate::errors::AppResult;

    pub async fn list<C: ConnectionTrait>(db: &C, search: Option<&str>) -> AppResult<Vec<Category>> {
        let mut select = CategoryEntity::find();

        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(category::Column::Name))).like(contains_pattern(term)),
            );
        }

        let models = select.order_by_asc(category::Column::Id).all(db).await?;
        Ok(models.into_iter().map(Category::from).collect())
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Category>> {
        Ok(CategoryEntity::find_by_id(id).one(db).await?.map(Category::from))
    }

    pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<bool> {
        Ok(find_by_id(db, id).await?.is_some())
    }

    pub async fn create<C: ConnectionTrait>(db: &C, name: String) -> AppResult<Category> {
        let model = ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok(Category::from(model))
    }

    pub async fn update<C: ConnectionTrait>(db: &C, id: i32, name: String) -> AppResult<Option<Category>> {
        let Some(model) = CategoryEntity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.name = Set(name);
        let model = active.update(db).await?;

        Ok(Some(Category::from(model)))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<bool> {
        let result = CategoryEntity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
