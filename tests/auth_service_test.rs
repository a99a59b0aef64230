//! Registration, login and token handling.

mod support;

use faq_catalog::domain::Role;
use faq_catalog::errors::AppError;
use faq_catalog::services::{AuthService, Registration, ServiceContainer};

use support::{TestContext, PASSWORD};

fn registration(name: &str, email: &str, role: Role) -> Registration {
    Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        role,
    }
}

#[tokio::test]
async fn test_merchant_registration_creates_named_store() {
    let ctx = TestContext::new().await;

    let user = ctx
        .services
        .auth()
        .register(registration("Jane", "jane@example.com", Role::Merchant))
        .await
        .unwrap();

    let store = user.store.expect("merchant store");
    assert_eq!(store.name, "Jane's Store");
    assert_eq!(store.merchant_id, user.id);
    assert_eq!(ctx.count("stores").await, 1);
}

#[tokio::test]
async fn test_customer_and_admin_have_no_store() {
    let ctx = TestContext::new().await;

    let customer = ctx
        .services
        .auth()
        .register(registration("Carl", "carl@example.com", Role::Customer))
        .await
        .unwrap();
    assert!(customer.store.is_none());

    ctx.admin().await;
    assert_eq!(ctx.count("stores").await, 0);
}

#[tokio::test]
async fn test_admin_cannot_self_register() {
    let ctx = TestContext::new().await;

    let result = ctx
        .services
        .auth()
        .register(registration("Eve", "eve@example.com", Role::Admin))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(ctx.count("users").await, 0);
}

#[tokio::test]
async fn test_duplicate_email_conflicts_without_second_store() {
    let ctx = TestContext::new().await;
    let auth = ctx.services.auth();

    auth.register(registration("Jane", "jane@example.com", Role::Merchant))
        .await
        .unwrap();
    let again = auth
        .register(registration("Janet", "jane@example.com", Role::Merchant))
        .await;

    assert!(matches!(again, Err(AppError::Conflict(_))));
    assert_eq!(ctx.count("users").await, 1);
    assert_eq!(ctx.count("stores").await, 1);
}

#[tokio::test]
async fn test_weak_password_rejected() {
    let ctx = TestContext::new().await;
    let mut weak = registration("Jane", "jane@example.com", Role::Customer);
    weak.password = "password".to_string();

    let result = ctx.services.auth().register(weak).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_login_issues_token_for_registered_identity() {
    let ctx = TestContext::new().await;
    let auth = ctx.services.auth();
    let (merchant, store_id) = ctx.merchant("Jane").await;

    let login = auth
        .login("jane@example.com".to_string(), PASSWORD.to_string())
        .await
        .unwrap();
    assert_eq!(login.user.id, merchant.user_id);
    assert_eq!(login.user.store.map(|s| s.id), Some(store_id));
    assert_eq!(login.token.token_type, "Bearer");

    let claims = auth.verify_token(&login.token.access_token).unwrap();
    assert_eq!(claims.identity().unwrap(), merchant);

    let me = auth.me(merchant).await.unwrap();
    assert_eq!(me.email, "jane@example.com");
    assert_eq!(me.role, Role::Merchant);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let ctx = TestContext::new().await;
    let auth = ctx.services.auth();
    ctx.customer("Carl").await;

    let wrong_password = auth
        .login("carl@example.com".to_string(), "Wrong123!".to_string())
        .await;
    let unknown_email = auth
        .login("nobody@example.com".to_string(), PASSWORD.to_string())
        .await;

    assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_seeding_same_admin_twice_conflicts() {
    let ctx = TestContext::new().await;
    ctx.admin().await;

    let again = ctx
        .services
        .auth()
        .provision_admin("Admin".into(), "admin@example.com".into(), PASSWORD.into())
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));
}
