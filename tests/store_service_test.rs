//! Store directory: public listing and localized store pages.

mod support;

use faq_catalog::errors::AppError;
use faq_catalog::services::{CreateFaq, FaqService, ServiceContainer, StoreService};
use faq_catalog::types::{PageRequest, SortDirection};

use support::{tr, TestContext};

#[tokio::test]
async fn test_store_page_falls_back_to_english_then_oldest() {
    let ctx = TestContext::new().await;
    let admin = ctx.admin().await;
    let (jane, jane_store) = ctx.merchant("Jane").await;
    let (bob, _) = ctx.merchant("Bob").await;
    let category = ctx.category("General").await;
    let faqs = ctx.services.faqs();

    let global = faqs
        .create(
            admin,
            CreateFaq {
                category_id: category,
                translations: vec![tr("en", "Hello", "A"), tr("fr", "Bonjour", "R")],
            },
        )
        .await
        .unwrap();
    let spanish_only = faqs
        .create(
            jane,
            CreateFaq {
                category_id: category,
                translations: vec![tr("es", "Hola", "R")],
            },
        )
        .await
        .unwrap();
    faqs.create(
        bob,
        CreateFaq {
            category_id: category,
            translations: vec![tr("en", "Other store", "A")],
        },
    )
    .await
    .unwrap();

    let stores = ctx.services.stores();
    let page = stores.get_with_faqs(jane_store, "de").await.unwrap();
    assert_eq!(page.store.name, "Jane's Store");

    // Newest first, and Bob's FAQ is not part of Jane's page
    let ids: Vec<i32> = page.faqs.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![spanish_only.id, global.id]);
    assert!(page.faqs.iter().all(|f| f.translations.len() == 1));
    assert_eq!(page.faqs[0].translations[0].language, "es");
    assert_eq!(page.faqs[1].translations[0].language, "en");

    let french = stores.get_with_faqs(jane_store, "fr").await.unwrap();
    assert_eq!(french.faqs[1].translations[0].question, "Bonjour");
}

#[tokio::test]
async fn test_missing_store_is_not_found() {
    let ctx = TestContext::new().await;

    let result = ctx.services.stores().get_with_faqs(42, "en").await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_store_list_is_paginated() {
    let ctx = TestContext::new().await;
    for name in ["Ann", "Ben", "Cal"] {
        ctx.merchant(name).await;
    }
    ctx.customer("Carl").await;

    let stores = ctx.services.stores();
    let first = stores
        .list(PageRequest::new(Some(1), Some(2), SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(first.meta.total, 3);
    assert_eq!(first.meta.total_pages, 2);
    let names: Vec<&str> = first.data.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ann's Store", "Ben's Store"]);

    let newest = stores.list(PageRequest::default()).await.unwrap();
    assert_eq!(newest.data[0].name, "Cal's Store");
}

#[tokio::test]
async fn test_store_lookup_by_merchant() {
    let ctx = TestContext::new().await;
    let (jane, jane_store) = ctx.merchant("Jane").await;
    let customer = ctx.customer("Carl").await;
    let stores = ctx.services.stores();

    let store = stores.get_by_merchant(jane.user_id).await.unwrap();
    assert_eq!(store.id, jane_store);

    let none = stores.get_by_merchant(customer.user_id).await;
    assert!(matches!(none, Err(AppError::StoreNotFound)));
}

#[tokio::test]
async fn test_directory_lookup_agrees_with_faq_ownership() {
    let ctx = TestContext::new().await;
    let (jane, _) = ctx.merchant("Jane").await;
    let category = ctx.category("General").await;

    let faq = ctx
        .services
        .faqs()
        .create(
            jane,
            CreateFaq {
                category_id: category,
                translations: vec![tr("en", "Q", "A")],
            },
        )
        .await
        .unwrap();
    let store = ctx.services.stores().get_by_merchant(jane.user_id).await.unwrap();

    assert_eq!(faq.scope.store_id(), Some(store.id));
}
