//! Store directory: public listing and the localized store page.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::fallback::localize;
use crate::domain::{Store, StoreSummary, StoreWithFaqs};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::{PageRequest, Paginated};

#[async_trait]
pub trait StoreService: Send + Sync {
    /// One page of stores ordered by id
    async fn list(&self, page: PageRequest) -> AppResult<Paginated<StoreSummary>>;

    /// The store with its own and every global FAQ, each reduced to the
    /// translation best matching `language`
    async fn get_with_faqs(&self, id: i32, language: &str) -> AppResult<StoreWithFaqs>;

    /// Store owned by a merchant; `StoreNotFound` if there is none.
    ///
    /// Directory-level lookup for callers that need the whole store. The FAQ
    /// engine resolves ownership through
    /// [`resolve_merchant_store`](crate::domain::access::resolve_merchant_store)
    /// on the same repository query, so both agree on which store a merchant owns.
    async fn get_by_merchant(&self, merchant_id: i32) -> AppResult<Store>;
}

pub struct StoreDirectory<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StoreDirectory<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StoreService for StoreDirectory<U> {
    async fn list(&self, page: PageRequest) -> AppResult<Paginated<StoreSummary>> {
        let (stores, total) = self.uow.stores().list(page).await?;
        let data = stores.into_iter().map(StoreSummary::from).collect();
        Ok(Paginated::new(data, page, total))
    }

    async fn get_with_faqs(&self, id: i32, language: &str) -> AppResult<StoreWithFaqs> {
        let store = self
            .uow
            .stores()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let faqs = self.uow.faqs().list_for_store(store.id).await?;
        tracing::debug!(store_id = store.id, language, faqs = faqs.len(), "store page loaded");

        Ok(StoreWithFaqs {
            store: store.into(),
            faqs: faqs
                .into_iter()
                .map(|faq| localize(faq, language).into())
                .collect(),
        })
    }

    async fn get_by_merchant(&self, merchant_id: i32) -> AppResult<Store> {
        self.uow
            .stores()
            .find_by_merchant(merchant_id)
            .await?
            .ok_or(AppError::StoreNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::{Faq, Scope, Translation};
    use crate::infra::{
        CategoryRepository, FaqRepository, MockFaqRepository, MockStoreRepository,
        StoreRepository, TransactionContext, UserRepository,
    };

    struct TestUnitOfWork {
        stores: Arc<MockStoreRepository>,
        faqs: Arc<MockFaqRepository>,
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            unimplemented!("not used by the store directory")
        }

        fn stores(&self) -> Arc<dyn StoreRepository> {
            self.stores.clone()
        }

        fn categories(&self) -> Arc<dyn CategoryRepository> {
            unimplemented!("not used by the store directory")
        }

        fn faqs(&self) -> Arc<dyn FaqRepository> {
            self.faqs.clone()
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

    fn service(stores: MockStoreRepository, faqs: MockFaqRepository) -> StoreDirectory<TestUnitOfWork> {
        StoreDirectory::new(Arc::new(TestUnitOfWork {
            stores: Arc::new(stores),
            faqs: Arc::new(faqs),
        }))
    }

    fn store(id: i32) -> Store {
        Store {
            id,
            name: "Jane's Store".to_string(),
            merchant_id: 7,
            created_at: Utc::now(),
        }
    }

    fn translation(id: i32, language: &str) -> Translation {
        Translation {
            id,
            faq_id: 1,
            language: language.to_string(),
            question: format!("q-{language}"),
            answer: format!("a-{language}"),
        }
    }

    #[tokio::test]
    async fn test_missing_store_is_not_found() {
        let mut stores = MockStoreRepository::new();
        stores.expect_find_by_id().with(eq(5)).returning(|_| Ok(None));

        let result = service(stores, MockFaqRepository::new()).get_with_faqs(5, "en").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_store_page_keeps_one_translation_per_faq() {
        let mut stores = MockStoreRepository::new();
        stores.expect_find_by_id().returning(|id| Ok(Some(store(id))));
        let mut faqs = MockFaqRepository::new();
        faqs.expect_list_for_store().with(eq(3)).returning(|_| {
            Ok(vec![Faq {
                id: 1,
                category_id: 1,
                scope: Scope::Global,
                category: None,
                translations: vec![translation(1, "en"), translation(2, "fr")],
            }])
        });

        let page = service(stores, faqs).get_with_faqs(3, "fr").await.unwrap();
        assert_eq!(page.store.id, 3);
        assert_eq!(page.faqs.len(), 1);
        assert_eq!(page.faqs[0].translations.len(), 1);
        assert_eq!(page.faqs[0].translations[0].language, "fr");
    }

    #[tokio::test]
    async fn test_merchant_without_store() {
        let mut stores = MockStoreRepository::new();
        stores.expect_find_by_merchant().returning(|_| Ok(None));

        let result = service(stores, MockFaqRepository::new()).get_by_merchant(7).await;
        assert!(matches!(result, Err(AppError::StoreNotFound)));
    }

    #[tokio::test]
    async fn test_list_builds_pagination_meta() {
        let mut stores = MockStoreRepository::new();
        stores
            .expect_list()
            .returning(|_| Ok((vec![store(1), store(2)], 5)));

        let page = service(stores, MockFaqRepository::new())
            .list(PageRequest::new(Some(1), Some(2), Default::default()))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total, 5);
        assert_eq!(page.meta.total_pages, 3);
    }
}
