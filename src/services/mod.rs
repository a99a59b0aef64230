//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod auth_service;
pub mod container;
mod category_service;
mod faq_service;
mod store_service;
mod translation_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{
    AuthService, Authenticator, Claims, LoginResponse, Registration, TokenResponse,
};
pub use category_service::{CategoryManager, CategoryService};
pub use faq_service::{CreateFaq, FaqEngine, FaqService, UpdateFaq};
pub use store_service::{StoreDirectory, StoreService};
pub use translation_service::{TranslationManager, TranslationService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
