//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle:
//! everything done through a [`TransactionContext`] commits together on
//! `Ok` or rolls back together on `Err`.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    category_query, faq_query, store_query, translation_query, user_query, CategoryRepository,
    CategoryTable, FaqRepository, FaqTable, StoreRepository, StoreTable, UserRepository,
    UserTable,
};
use crate::domain::{
    Faq, NewUser, ReconcilePlan, Scope, Store, StoreOwnership, Translation, TranslationInput, User,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Note: not mockable directly due to the generic `transaction` method.
/// Tests wrap mocked repositories in a hand-written implementation or run
/// against SQLite.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn stores(&self) -> Arc<dyn StoreRepository>;

    fn categories(&self) -> Arc<dyn CategoryRepository>;

    fn faqs(&self) -> Arc<dyn FaqRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed on success, rolled back on error. The closure may only
    /// capture owned data; every statement must go through the context.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    pub fn stores(&self) -> TxStoreRepository<'_> {
        TxStoreRepository { txn: self.txn }
    }

    pub fn categories(&self) -> TxCategoryRepository<'_> {
        TxCategoryRepository { txn: self.txn }
    }

    pub fn faqs(&self) -> TxFaqRepository<'_> {
        TxFaqRepository { txn: self.txn }
    }

    pub fn translations(&self) -> TxTranslationRepository<'_> {
        TxTranslationRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserTable>,
    store_repo: Arc<StoreTable>,
    category_repo: Arc<CategoryTable>,
    faq_repo: Arc<FaqTable>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserTable::new(db.clone())),
            store_repo: Arc::new(StoreTable::new(db.clone())),
            category_repo: Arc::new(CategoryTable::new(db.clone())),
            faq_repo: Arc::new(FaqTable::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn stores(&self) -> Arc<dyn StoreRepository> {
        self.store_repo.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.category_repo.clone()
    }

    fn faqs(&self) -> Arc<dyn FaqRepository> {
        self.faq_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        user_query::find_by_email(self.txn, email).await
    }

    pub async fn create(&self, user: NewUser) -> AppResult<User> {
        user_query::create(self.txn, user).await
    }
}

/// Transaction-aware store repository.
pub struct TxStoreRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxStoreRepository<'a> {
    pub async fn create(&self, name: String, merchant_id: i32) -> AppResult<Store> {
        store_query::create(self.txn, name, merchant_id).await
    }
}

#[async_trait]
impl<'a> StoreOwnership for TxStoreRepository<'a> {
    async fn merchant_store_id(&self, merchant_id: i32) -> AppResult<Option<i32>> {
        store_query::merchant_store_id(self.txn, merchant_id).await
    }
}

/// Transaction-aware category repository.
pub struct TxCategoryRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxCategoryRepository<'a> {
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        category_query::exists(self.txn, id).await
    }
}

/// Transaction-aware FAQ repository.
pub struct TxFaqRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxFaqRepository<'a> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Faq>> {
        faq_query::find_by_id(self.txn, id).await
    }

    pub async fn insert(
        &self,
        category_id: i32,
        scope: Scope,
        translations: Vec<TranslationInput>,
    ) -> AppResult<i32> {
        faq_query::insert(self.txn, category_id, scope, translations).await
    }

    pub async fn set_category(&self, id: i32, category_id: i32) -> AppResult<()> {
        faq_query::set_category(self.txn, id, category_id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        faq_query::delete(self.txn, id).await
    }
}

/// Transaction-aware translation repository.
pub struct TxTranslationRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxTranslationRepository<'a> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Translation>> {
        translation_query::find_by_id(self.txn, id).await
    }

    pub async fn insert(&self, faq_id: i32, input: TranslationInput) -> AppResult<Translation> {
        translation_query::insert(self.txn, faq_id, input).await
    }

    pub async fn update(&self, id: i32, input: TranslationInput) -> AppResult<Option<Translation>> {
        translation_query::update(self.txn, id, input).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        translation_query::delete(self.txn, id).await
    }

    pub async fn apply_plan(&self, faq_id: i32, plan: ReconcilePlan) -> AppResult<()> {
        translation_query::apply_plan(self.txn, faq_id, plan).await
    }
}

/// Shorthand for running a block inside [`UnitOfWork::transaction`].
///
/// ```ignore
/// let id = with_transaction!(self.uow, |ctx| {
///     ctx.faqs().insert(category_id, scope, translations).await
/// })?;
/// ```
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
