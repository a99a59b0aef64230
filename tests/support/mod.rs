//! Shared fixtures: a migrated in-memory SQLite database and helpers to
//! populate it through the real services.

#![allow(dead_code)]

use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use faq_catalog::config::Config;
use faq_catalog::domain::{Identity, NewUser, Role, TranslationInput};
use faq_catalog::infra::{Migrator, Persistence, UnitOfWork, UserRepository};
use faq_catalog::services::{
    AuthService, CategoryService, Registration, ServiceContainer, Services,
};

pub const PASSWORD: &str = "Secret123!";

pub fn config() -> Config {
    Config::new("sqlite::memory:", "integration-test-secret-of-32-chars!").unwrap()
}

/// One connection, so every statement sees the same in-memory database
pub async fn database() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = SeaDatabase::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub struct TestContext {
    pub db: DatabaseConnection,
    pub services: Services,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = database().await;
        let services = Services::from_connection(db.clone(), config());
        Self { db, services }
    }

    pub async fn admin(&self) -> Identity {
        let user = self
            .services
            .auth()
            .provision_admin("Admin".into(), "admin@example.com".into(), PASSWORD.into())
            .await
            .unwrap();
        Identity::new(user.id, Role::Admin)
    }

    /// Registers a merchant; returns the identity and the store id
    pub async fn merchant(&self, name: &str) -> (Identity, i32) {
        let (identity, store_id) = self.register(name, Role::Merchant).await;
        (identity, store_id.unwrap())
    }

    pub async fn customer(&self, name: &str) -> Identity {
        self.register(name, Role::Customer).await.0
    }

    /// A merchant account created directly, bypassing store creation
    pub async fn storeless_merchant(&self) -> Identity {
        let uow = Persistence::new(self.db.clone());
        let user = uow
            .users()
            .create(NewUser {
                name: "Nostore".into(),
                email: "nostore@example.com".into(),
                password_hash: "unused".into(),
                role: Role::Merchant,
            })
            .await
            .unwrap();
        Identity::new(user.id, Role::Merchant)
    }

    pub async fn category(&self, name: &str) -> i32 {
        self.services
            .categories()
            .create(name.to_string())
            .await
            .unwrap()
            .id
    }

    pub async fn count(&self, table: &str) -> i64 {
        let backend = self.db.get_database_backend();
        let row = self
            .db
            .query_one(Statement::from_string(
                backend,
                format!("SELECT COUNT(*) AS n FROM {}", table),
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get::<i64>("", "n").unwrap()
    }

    async fn register(&self, name: &str, role: Role) -> (Identity, Option<i32>) {
        let user = self
            .services
            .auth()
            .register(Registration {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                password: PASSWORD.to_string(),
                role,
            })
            .await
            .unwrap();
        (Identity::new(user.id, user.role), user.store.map(|s| s.id))
    }
}

pub fn tr(language: &str, question: &str, answer: &str) -> TranslationInput {
    TranslationInput {
        language: language.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}
