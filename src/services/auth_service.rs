//! Authentication service - registration, login and token verification.
//!
//! Passwords go through the domain `Password` value object; tokens are
//! HS256 JWTs carrying the user id and role.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Identity, NewUser, Password, Role, Store, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Never matches a real password; verified against when the email is
/// unknown so both failure paths do comparable work.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$J8b0uFhBLwlAkP6y1Fmv9Jg1QJQ4bQnSxqjB9XhU0Wc";

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Caller identity; a role outside the known set is `UnsupportedRole`.
    pub fn identity(&self) -> AppResult<Identity> {
        Ok(Identity::new(self.sub, self.role.parse()?))
    }
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Successful login: the user (with their store) and a token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: TokenResponse,
}

/// Validated self-registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a merchant or customer; merchants get a store in the same
    /// transaction.
    async fn register(&self, registration: Registration) -> AppResult<UserResponse>;

    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;

    /// Profile of the authenticated caller
    async fn me(&self, identity: Identity) -> AppResult<UserResponse>;

    /// Create an admin account (seeding only; admins cannot self-register)
    async fn provision_admin(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for a user
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    async fn owned_store(&self, user: &User) -> AppResult<Option<Store>> {
        if user.is_merchant() {
            self.uow.stores().find_by_merchant(user.id).await
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, registration: Registration) -> AppResult<UserResponse> {
        if !registration.role.is_self_registrable() {
            return Err(AppError::validation("Role must be merchant or customer"));
        }

        let password_hash = Password::new(&registration.password)?.into_string();
        let Registration {
            name, email, role, ..
        } = registration;

        let (user, store) = with_transaction!(self.uow, |ctx| {
            if ctx.users().find_by_email(&email).await?.is_some() {
                return Err(AppError::conflict("Email"));
            }

            let user = ctx
                .users()
                .create(NewUser {
                    name,
                    email,
                    password_hash,
                    role,
                })
                .await?;

            let store = if user.is_merchant() {
                Some(ctx.stores().create(Store::default_name(&user.name), user.id).await?)
            } else {
                None
            };

            Ok::<_, AppError>((user, store))
        })?;

        tracing::info!(user_id = user.id, role = %user.role, "user registered");
        Ok(UserResponse::new(user, store))
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        let user_result = self.uow.users().find_by_email(&email).await?;

        let stored = Password::from_hash(
            user_result
                .as_ref()
                .map_or(DUMMY_HASH, |user| user.password_hash.as_str())
                .to_string(),
        );
        let password_valid = stored.verify(&password);

        let user = match user_result {
            Some(user) if password_valid => user,
            _ => {
                tracing::warn!("failed login attempt");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = generate_token(&user, &self.config)?;
        let store = self.owned_store(&user).await?;

        tracing::info!(user_id = user.id, role = %user.role, "user logged in");
        Ok(LoginResponse {
            user: UserResponse::new(user, store),
            token,
        })
    }

    async fn me(&self, identity: Identity) -> AppResult<UserResponse> {
        let user = self
            .uow
            .users()
            .find_by_id(identity.user_id)
            .await?
            .ok_or(AppError::NotFound)?;
        let store = self.owned_store(&user).await?;

        Ok(UserResponse::new(user, store))
    }

    async fn provision_admin(&self, name: String, email: String, password: String) -> AppResult<User> {
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self
            .uow
            .users()
            .create(NewUser {
                name,
                email,
                password_hash,
                role: Role::Admin,
            })
            .await?;

        tracing::info!(user_id = user.id, "admin provisioned");
        Ok(user)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new("sqlite::memory:", "unit-test-secret-that-is-long-enough").unwrap()
    }

    fn user(role: Role) -> User {
        User {
            id: 42,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip_carries_identity() {
        let config = config();
        let token = generate_token(&user(Role::Merchant), &config).unwrap();

        let claims = verify_token_internal(&token.access_token, &config).unwrap();
        assert_eq!(claims.identity().unwrap(), Identity::new(42, Role::Merchant));
        assert_eq!(token.expires_in, 24 * 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let token = generate_token(&user(Role::Admin), &config()).unwrap();
        let other = Config::new("sqlite::memory:", "a-completely-different-secret-value").unwrap();

        assert!(matches!(
            verify_token_internal(&token.access_token, &other),
            Err(AppError::Jwt(_))
        ));
    }

    #[test]
    fn test_unknown_role_claim_is_unsupported() {
        let claims = Claims {
            sub: 1,
            role: "superuser".to_string(),
            exp: 0,
            iat: 0,
        };
        assert!(matches!(claims.identity(), Err(AppError::UnsupportedRole)));
    }

    #[test]
    fn test_dummy_hash_never_verifies() {
        assert!(!Password::from_hash(DUMMY_HASH.to_string()).verify("admin123!"));
    }
}
