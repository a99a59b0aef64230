//! HTTP surface: routing, auth gates and the response envelope.

mod support;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use faq_catalog::api::create_router;
use faq_catalog::infra::Database;
use faq_catalog::services::{AuthService, ServiceContainer};
use faq_catalog::AppState;

use support::{config, TestContext, PASSWORD};

fn router(ctx: &TestContext) -> Router {
    let database = Arc::new(Database::from_connection(ctx.db.clone()));
    create_router(AppState::from_config(database, config()))
}

async fn token_for(ctx: &TestContext, email: &str) -> String {
    ctx.services
        .auth()
        .login(email.to_string(), PASSWORD.to_string())
        .await
        .unwrap()
        .token
        .access_token
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_reports_database() {
    let ctx = TestContext::new().await;

    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_faqs_require_token() {
    let ctx = TestContext::new().await;

    let request = Request::get("/api/faqs").body(Body::empty()).unwrap();
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let ctx = TestContext::new().await;

    let request = Request::get("/api/faqs")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_register_returns_created_with_store() {
    let ctx = TestContext::new().await;

    let request = json_request(
        "POST",
        "/auth/register",
        None,
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "password": PASSWORD,
            "role": "merchant"
        }),
    );
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["store"]["name"], "Jane's Store");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_invalid_payload_is_bad_request() {
    let ctx = TestContext::new().await;

    let request = json_request(
        "POST",
        "/auth/register",
        None,
        json!({
            "name": "J",
            "email": "not-an-email",
            "password": PASSWORD,
            "role": "customer"
        }),
    );
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_customer_cannot_create_category() {
    let ctx = TestContext::new().await;
    ctx.customer("Carl").await;
    let token = token_for(&ctx, "carl@example.com").await;

    let request = json_request(
        "POST",
        "/api/faq-categories",
        Some(&token),
        json!({ "name": "Billing" }),
    );
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
    assert_eq!(ctx.count("categories").await, 0);
}

#[tokio::test]
async fn test_merchant_creates_faq_over_http() {
    let ctx = TestContext::new().await;
    let (_, store_id) = ctx.merchant("Jane").await;
    let category = ctx.category("Shipping").await;
    let token = token_for(&ctx, "jane@example.com").await;

    let request = json_request(
        "POST",
        "/api/faqs",
        Some(&token),
        json!({
            "category_id": category,
            "translations": [
                { "language": "en", "question": "When?", "answer": "Soon" }
            ]
        }),
    );
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["store_id"], store_id);
    assert_eq!(body["data"]["is_global"], false);
    assert_eq!(body["data"]["translations"][0]["language"], "en");
}

#[tokio::test]
async fn test_stores_are_public_and_paginated() {
    let ctx = TestContext::new().await;
    ctx.merchant("Jane").await;

    let request = Request::get("/api/stores?page=1&page_size=10")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Jane's Store");
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["meta"]["page_size"], 10);
}

#[tokio::test]
async fn test_unknown_store_is_not_found() {
    let ctx = TestContext::new().await;

    let request = Request::get("/api/stores/404")
        .header(header::ACCEPT_LANGUAGE, "fr-CA,fr;q=0.9")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_blank_nested_translation_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.merchant("Jane").await;
    let category = ctx.category("Shipping").await;
    let token = token_for(&ctx, "jane@example.com").await;

    let request = json_request(
        "POST",
        "/api/faqs",
        Some(&token),
        json!({
            "category_id": category,
            "translations": [
                { "language": "en", "question": "", "answer": "Soon" }
            ]
        }),
    );
    let (status, body) = send(router(&ctx), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .is_some_and(|m| m.contains("Question is required")));
    assert_eq!(ctx.count("faqs").await, 0);
}
