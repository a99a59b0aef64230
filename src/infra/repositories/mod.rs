//! Repository layer - Data access abstraction
//!
//! Each repository exposes a mockable trait backed by the pooled
//! connection. The SQL lives in per-repository `query` modules that are
//! generic over the connection, so the transactional repositories in
//! [`super::unit_of_work`] run the exact same statements.

use sea_orm::sea_query::LikeExpr;

mod category_repository;
pub(crate) mod entities;
mod faq_repository;
mod store_repository;
mod translation_repository;
mod user_repository;

pub use category_repository::{CategoryRepository, CategoryTable};
pub use faq_repository::{FaqRepository, FaqTable};
pub use store_repository::{StoreRepository, StoreTable};
pub use user_repository::{UserRepository, UserTable};

pub(crate) use category_repository::query as category_query;
pub(crate) use faq_repository::query as faq_query;
pub(crate) use store_repository::query as store_query;
pub(crate) use translation_repository::query as translation_query;
pub(crate) use user_repository::query as user_query;

/// Escape character in search patterns
const LIKE_ESCAPE: char = '!';

/// Case-insensitive substring pattern for `LOWER(col) LIKE ..`.
///
/// `%` and `_` in the term match literally.
pub(crate) fn contains_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use faq_repository::MockFaqRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use store_repository::MockStoreRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

