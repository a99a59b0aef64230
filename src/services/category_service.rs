//! Category directory. Route-level gates decide who may call what; there
//! is no authorization here.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Category;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CategoryService: Send + Sync {
    /// All categories, optionally filtered by case-insensitive name substring
    async fn list(&self, search: Option<String>) -> AppResult<Vec<Category>>;

    async fn get(&self, id: i32) -> AppResult<Category>;

    async fn create(&self, name: String) -> AppResult<Category>;

    async fn update(&self, id: i32, name: String) -> AppResult<Category>;

    /// Referencing FAQs are left untouched
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn list(&self, search: Option<String>) -> AppResult<Vec<Category>> {
        self.uow.categories().list(search).await
    }

    async fn get(&self, id: i32) -> AppResult<Category> {
        self.uow.categories().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, name: String) -> AppResult<Category> {
        let category = self.uow.categories().create(name).await?;
        tracing::info!(category_id = category.id, "category created");
        Ok(category)
    }

    async fn update(&self, id: i32, name: String) -> AppResult<Category> {
        let category = self.uow.categories().update(id, name).await?.ok_or_not_found()?;
        tracing::info!(category_id = id, "category updated");
        Ok(category)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.uow.categories().delete(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(category_id = id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::infra::{
        CategoryRepository, FaqRepository, MockCategoryRepository, StoreRepository,
        TransactionContext, UserRepository,
    };

    /// Unit of Work exposing only a mocked category repository
    struct TestUnitOfWork {
        categories: Arc<MockCategoryRepository>,
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            unimplemented!("not used by the category directory")
        }

        fn stores(&self) -> Arc<dyn StoreRepository> {
            unimplemented!("not used by the category directory")
        }

        fn categories(&self) -> Arc<dyn CategoryRepository> {
            self.categories.clone()
        }

        fn faqs(&self) -> Arc<dyn FaqRepository> {
            unimplemented!("not used by the category directory")
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }

    fn service(repo: MockCategoryRepository) -> CategoryManager<TestUnitOfWork> {
        CategoryManager::new(Arc::new(TestUnitOfWork {
            categories: Arc::new(repo),
        }))
    }

    fn shipping() -> Category {
        Category {
            id: 1,
            name: "Shipping".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_passes_search_through() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list()
            .with(eq(Some("ship".to_string())))
            .returning(|_| Ok(vec![shipping()]));

        let result = service(repo).list(Some("ship".to_string())).await.unwrap();
        assert_eq!(result, vec![shipping()]);
    }

    #[tokio::test]
    async fn test_get_missing_category_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));

        let result = service(repo).get(9).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let result = service(repo).update(9, "Returns".to_string()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_delete().with(eq(1)).returning(|_| Ok(true));
        repo.expect_delete().with(eq(2)).returning(|_| Ok(false));
        let service = service(repo);

        assert!(service.delete(1).await.is_ok());
        assert!(matches!(service.delete(2).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_returns_stored_category() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_create()
            .with(eq("Shipping".to_string()))
            .times(1)
            .returning(|name| Ok(Category { id: 1, name }));

        let created = service(repo).create("Shipping".to_string()).await.unwrap();
        assert_eq!(created, shipping());
    }
}
