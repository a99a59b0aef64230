//! HTTP request handlers.

pub mod auth_handler;
pub mod category_handler;
pub mod faq_handler;
pub mod store_handler;
pub mod translation_handler;

pub use auth_handler::auth_routes;
pub use category_handler::category_routes;
pub use faq_handler::faq_routes;
pub use store_handler::store_routes;
pub use translation_handler::translation_routes;
