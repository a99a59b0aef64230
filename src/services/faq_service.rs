//! FAQ access engine.
//!
//! Every read and write goes through the access policy in
//! [`crate::domain::access`]. Mutations run in one transaction and the
//! result is reloaded once committed.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::access::{authorize, manage_decision, resolve_merchant_store, view_decision};
use crate::domain::reconcile::dedup_by_language;
use crate::domain::{reconcile, Faq, Identity, Role, Scope, TranslationInput, VisibilityFilter};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::{PageRequest, Paginated};
use crate::with_transaction;

/// New FAQ content; ownership comes from the caller
#[derive(Debug, Clone)]
pub struct CreateFaq {
    pub category_id: i32,
    pub translations: Vec<TranslationInput>,
}

/// Full desired state: translations not listed are removed
#[derive(Debug, Clone)]
pub struct UpdateFaq {
    pub category_id: Option<i32>,
    pub translations: Vec<TranslationInput>,
}

#[async_trait]
pub trait FaqService: Send + Sync {
    /// Visible FAQs, optionally filtered by a question/answer substring
    async fn list(
        &self,
        identity: Identity,
        search: Option<String>,
        page: PageRequest,
    ) -> AppResult<Paginated<Faq>>;

    async fn get(&self, identity: Identity, id: i32) -> AppResult<Faq>;

    /// Admins create global FAQs, merchants create FAQs for their own store
    async fn create(&self, identity: Identity, input: CreateFaq) -> AppResult<Faq>;

    async fn update(&self, identity: Identity, id: i32, input: UpdateFaq) -> AppResult<Faq>;

    /// Removes the FAQ together with all of its translations
    async fn delete(&self, identity: Identity, id: i32) -> AppResult<()>;
}

pub struct FaqEngine<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FaqEngine<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn reload(&self, id: i32) -> AppResult<Faq> {
        self.uow
            .faqs()
            .find_by_id(id)
            .await?
            .ok_or(AppError::FaqNotFound)
    }
}

fn require_translations(translations: &[TranslationInput]) -> AppResult<()> {
    if translations.is_empty() {
        return Err(AppError::validation("At least one translation is required"));
    }
    Ok(())
}

fn log_denied(identity: &Identity, faq_id: i32) -> impl FnOnce(&AppError) + '_ {
    move |err| {
        tracing::warn!(
            user_id = identity.user_id,
            role = %identity.role,
            faq_id,
            error = %err,
            "faq access denied"
        )
    }
}

#[async_trait]
impl<U: UnitOfWork> FaqService for FaqEngine<U> {
    async fn list(
        &self,
        identity: Identity,
        search: Option<String>,
        page: PageRequest,
    ) -> AppResult<Paginated<Faq>> {
        let filter = VisibilityFilter::for_identity(&identity);
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let (faqs, total) = self.uow.faqs().list(filter, search, page).await?;
        Ok(Paginated::new(faqs, page, total))
    }

    async fn get(&self, identity: Identity, id: i32) -> AppResult<Faq> {
        let faq = self.reload(id).await?;

        let stores = self.uow.stores();
        authorize(view_decision(identity.role, &faq.scope), &identity, stores.as_ref())
            .await
            .inspect_err(log_denied(&identity, id))?;

        Ok(faq)
    }

    async fn create(&self, identity: Identity, input: CreateFaq) -> AppResult<Faq> {
        let translations = dedup_by_language(&input.translations);
        require_translations(&translations)?;
        let category_id = input.category_id;

        let id = with_transaction!(self.uow, |ctx| {
            if !ctx.categories().exists(category_id).await? {
                return Err(AppError::CategoryNotFound);
            }

            let scope = match identity.role {
                Role::Admin => Scope::Global,
                Role::Merchant => {
                    Scope::Store(resolve_merchant_store(&ctx.stores(), identity.user_id).await?)
                }
                Role::Customer => return Err(AppError::UnsupportedRole),
            };

            ctx.faqs().insert(category_id, scope, translations).await
        })?;

        tracing::info!(faq_id = id, user_id = identity.user_id, role = %identity.role, "faq created");
        self.reload(id).await
    }

    async fn update(&self, identity: Identity, id: i32, input: UpdateFaq) -> AppResult<Faq> {
        require_translations(&input.translations)?;
        let UpdateFaq {
            category_id,
            translations,
        } = input;

        with_transaction!(self.uow, |ctx| {
            let faq = ctx.faqs().find_by_id(id).await?.ok_or(AppError::FaqNotFound)?;
            authorize(manage_decision(identity.role, &faq.scope), &identity, &ctx.stores())
                .await
                .inspect_err(log_denied(&identity, id))?;

            if let Some(category_id) = category_id {
                if !ctx.categories().exists(category_id).await? {
                    return Err(AppError::CategoryNotFound);
                }
                if category_id != faq.category_id {
                    ctx.faqs().set_category(id, category_id).await?;
                }
            }

            let plan = reconcile(&faq.translations, &translations);
            if !plan.is_empty() {
                ctx.translations().apply_plan(id, plan).await?;
            }

            Ok::<_, AppError>(())
        })?;

        tracing::info!(faq_id = id, user_id = identity.user_id, role = %identity.role, "faq updated");
        self.reload(id).await
    }

    async fn delete(&self, identity: Identity, id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            let faq = ctx.faqs().find_by_id(id).await?.ok_or(AppError::FaqNotFound)?;
            authorize(manage_decision(identity.role, &faq.scope), &identity, &ctx.stores())
                .await
                .inspect_err(log_denied(&identity, id))?;

            ctx.faqs().delete(id).await
        })?;

        tracing::info!(faq_id = id, user_id = identity.user_id, role = %identity.role, "faq deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::{Store, Translation};
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
            unimplemented!("not used by faq reads")
        }

        fn stores(&self) -> Arc<dyn StoreRepository> {
            self.stores.clone()
        }

        fn categories(&self) -> Arc<dyn CategoryRepository> {
            unimplemented!("not used by faq reads")
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

    fn engine(stores: MockStoreRepository, faqs: MockFaqRepository) -> FaqEngine<TestUnitOfWork> {
        FaqEngine::new(Arc::new(TestUnitOfWork {
            stores: Arc::new(stores),
            faqs: Arc::new(faqs),
        }))
    }

    fn store_faq(store_id: i32) -> Faq {
        Faq {
            id: 1,
            category_id: 1,
            scope: Scope::Store(store_id),
            category: None,
            translations: vec![Translation {
                id: 1,
                faq_id: 1,
                language: "en".to_string(),
                question: "Q".to_string(),
                answer: "A".to_string(),
            }],
        }
    }

    fn owned_store(id: i32, merchant_id: i32) -> Store {
        Store {
            id,
            name: "Store".to_string(),
            merchant_id,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_faq_is_faq_not_found() {
        let mut faqs = MockFaqRepository::new();
        faqs.expect_find_by_id().returning(|_| Ok(None));

        let result = engine(MockStoreRepository::new(), faqs)
            .get(Identity::new(1, Role::Admin), 9)
            .await;
        assert!(matches!(result, Err(AppError::FaqNotFound)));
    }

    #[tokio::test]
    async fn test_owner_can_view_store_faq() {
        let mut faqs = MockFaqRepository::new();
        faqs.expect_find_by_id().returning(|_| Ok(Some(store_faq(3))));
        let mut stores = MockStoreRepository::new();
        stores
            .expect_find_by_merchant()
            .with(eq(7))
            .returning(|m| Ok(Some(owned_store(3, m))));

        let faq = engine(stores, faqs)
            .get(Identity::new(7, Role::Merchant), 1)
            .await
            .unwrap();
        assert_eq!(faq.scope, Scope::Store(3));
    }

    #[tokio::test]
    async fn test_other_merchant_cannot_view_store_faq() {
        let mut faqs = MockFaqRepository::new();
        faqs.expect_find_by_id().returning(|_| Ok(Some(store_faq(3))));
        let mut stores = MockStoreRepository::new();
        stores
            .expect_find_by_merchant()
            .returning(|m| Ok(Some(owned_store(4, m))));

        let result = engine(stores, faqs).get(Identity::new(8, Role::Merchant), 1).await;
        assert!(matches!(result, Err(AppError::UnauthorizedFaq)));
    }

    #[tokio::test]
    async fn test_customer_cannot_view_store_faq_without_store_lookup() {
        let mut faqs = MockFaqRepository::new();
        faqs.expect_find_by_id().returning(|_| Ok(Some(store_faq(3))));

        let result = engine(MockStoreRepository::new(), faqs)
            .get(Identity::new(2, Role::Customer), 1)
            .await;
        assert!(matches!(result, Err(AppError::UnauthorizedFaq)));
    }

    #[tokio::test]
    async fn test_list_uses_caller_visibility_and_drops_blank_search() {
        let mut faqs = MockFaqRepository::new();
        faqs.expect_list()
            .with(
                eq(VisibilityFilter::GlobalOrMerchantStores(7)),
                eq(None::<String>),
                eq(PageRequest::default()),
            )
            .returning(|_, _, _| Ok((vec![], 0)));

        let page = engine(MockStoreRepository::new(), faqs)
            .list(Identity::new(7, Role::Merchant), Some("   ".to_string()), PageRequest::default())
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_pages, 0);
    }

    #[tokio::test]
    async fn test_create_without_translations_is_rejected_before_any_write() {
        let input = CreateFaq {
            category_id: 1,
            translations: vec![],
        };

        let result = engine(MockStoreRepository::new(), MockFaqRepository::new())
            .create(Identity::new(1, Role::Admin), input)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
