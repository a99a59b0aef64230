//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod category;
pub mod faq;
pub mod store;
pub mod translation;
pub mod user;
