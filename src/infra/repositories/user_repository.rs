//! User repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{NewUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserTable {
    db: DatabaseConnection,
}

impl UserTable {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserTable {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        query::find_by_id(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        query::find_by_email(&self.db, email).await
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        query::create(&self.db, user).await
    }
}

/// Statements shared by the pooled and transactional repositories
pub(crate) mod query {
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set, SqlErr};

    use super::super::entities::user::{self, ActiveModel, Entity as UserEntity};
    use crate::domain::{NewUser, User};
    use crate::errors::{AppError, AppResult};

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<User>> {
        UserEntity::find_by_id(id)
            .one(db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    pub async fn create<C: ConnectionTrait>(db: &C, new_user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            role: Set(new_user.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Email"),
            _ => AppError::from(e),
        })?;

        User::try_from(model)
    }
}
