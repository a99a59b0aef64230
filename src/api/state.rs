//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CategoryService, FaqService, ServiceContainer, Services, StoreService,
    TranslationService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub category_service: Arc<dyn CategoryService>,
    pub store_service: Arc<dyn StoreService>,
    pub faq_service: Arc<dyn FaqService>,
    pub translation_service: Arc<dyn TranslationService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
    /// Allowed CORS origins
    pub cors_allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let cors_allowed_origins = Arc::new(config.cors_allowed_origins.clone());
        let container = Services::from_connection(database.get_connection(), config);

        Self::from_container(&container, database, cors_allowed_origins)
    }

    /// Create application state from any service container (e.g. a mock).
    pub fn from_container<C: ServiceContainer + ?Sized>(
        container: &C,
        database: Arc<Database>,
        cors_allowed_origins: Arc<Vec<String>>,
    ) -> Self {
        Self {
            auth_service: container.auth(),
            category_service: container.categories(),
            store_service: container.stores(),
            faq_service: container.faqs(),
            translation_service: container.translations(),
            database,
            cors_allowed_origins,
        }
    }
}
