//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, category_handler, faq_handler, store_handler, translation_handler,
};
use crate::domain::{
    Category, FaqResponse, Role, StoreSummary, StoreWithFaqs, TranslationInput,
    TranslationResponse, UserResponse,
};
use crate::services::{LoginResponse, TokenResponse};
use crate::types::{PaginationMeta, SortDirection};

/// OpenAPI documentation for the FAQ catalog
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FAQ Catalog API",
        version = "0.1.0",
        description = "Multi-tenant FAQ catalog: global and store-scoped FAQs with translations"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        auth_handler::me,
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::create_category,
        category_handler::update_category,
        category_handler::delete_category,
        faq_handler::list_faqs,
        faq_handler::get_faq,
        faq_handler::create_faq,
        faq_handler::update_faq,
        faq_handler::delete_faq,
        translation_handler::add_translation,
        translation_handler::update_translation,
        translation_handler::delete_translation,
        store_handler::list_stores,
        store_handler::get_store,
    ),
    components(
        schemas(
            Role,
            UserResponse,
            StoreSummary,
            StoreWithFaqs,
            Category,
            FaqResponse,
            TranslationInput,
            TranslationResponse,
            PaginationMeta,
            SortDirection,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            LoginResponse,
            TokenResponse,
            category_handler::CategoryRequest,
            faq_handler::CreateFaqRequest,
            faq_handler::UpdateFaqRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and current user"),
        (name = "Categories", description = "FAQ categories"),
        (name = "FAQs", description = "Role-aware FAQ access"),
        (name = "Translations", description = "Single translation operations"),
        (name = "Stores", description = "Public store directory")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
