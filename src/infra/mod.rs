//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations, repositories and the Unit of Work
//! that coordinates transactions across them.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CategoryRepository, CategoryTable, FaqRepository, FaqTable, StoreRepository, StoreTable,
    UserRepository, UserTable,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxCategoryRepository, TxFaqRepository, TxStoreRepository,
    TxTranslationRepository, TxUserRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCategoryRepository, MockFaqRepository, MockStoreRepository, MockUserRepository,
};
