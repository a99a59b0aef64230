//! Domain layer - core business entities and rules.
//!
//! No infrastructure here: access policy, translation reconciliation and
//! language fallback are pure and unit-tested in place.

pub mod access;
pub mod category;
pub mod faq;
pub mod fallback;
pub mod password;
pub mod reconcile;
pub mod role;
pub mod store;
pub mod user;

pub use access::{Decision, StoreOwnership, VisibilityFilter};
pub use category::Category;
pub use faq::{Faq, FaqResponse, Scope, Translation, TranslationInput, TranslationResponse};
pub use password::Password;
pub use reconcile::{reconcile, ReconcilePlan};
pub use role::{Identity, Role};
pub use store::{Store, StoreSummary, StoreWithFaqs};
pub use user::{NewUser, User, UserResponse};
