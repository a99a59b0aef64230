//! Service Container - centralized access to the application services.
//!
//! Handlers depend on the [`ServiceContainer`] trait, never on concrete
//! implementations, so router tests can swap in a mock.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CategoryManager, CategoryService, FaqEngine, FaqService,
    StoreDirectory, StoreService, TranslationManager, TranslationService,
};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn categories(&self) -> Arc<dyn CategoryService>;

    fn stores(&self) -> Arc<dyn StoreService>;

    fn faqs(&self) -> Arc<dyn FaqService>;

    fn translations(&self) -> Arc<dyn TranslationService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    category_service: Arc<dyn CategoryService>,
    store_service: Arc<dyn StoreService>,
    faq_service: Arc<dyn FaqService>,
    translation_service: Arc<dyn TranslationService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        category_service: Arc<dyn CategoryService>,
        store_service: Arc<dyn StoreService>,
        faq_service: Arc<dyn FaqService>,
        translation_service: Arc<dyn TranslationService>,
    ) -> Self {
        Self {
            auth_service,
            category_service,
            store_service,
            faq_service,
            translation_service,
        }
    }

    /// Wire every service onto one shared Unit of Work
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(Authenticator::new(uow.clone(), config)),
            Arc::new(CategoryManager::new(uow.clone())),
            Arc::new(StoreDirectory::new(uow.clone())),
            Arc::new(FaqEngine::new(uow.clone())),
            Arc::new(TranslationManager::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn stores(&self) -> Arc<dyn StoreService> {
        self.store_service.clone()
    }

    fn faqs(&self) -> Arc<dyn FaqService> {
        self.faq_service.clone()
    }

    fn translations(&self) -> Arc<dyn TranslationService> {
        self.translation_service.clone()
    }
}
