//! FAQ handlers. Visibility and ownership are enforced by the FAQ service;
//! this layer only restricts mutations to admins and merchants.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{ApiQuery, ValidatedJson};
use crate::api::middleware::require_staff;
use crate::api::AppState;
use crate::domain::{FaqResponse, Identity, TranslationInput};
use crate::errors::AppResult;
use crate::services::{CreateFaq, UpdateFaq};
use crate::types::{ApiResponse, Created, NoContent, PageRequest, SortDirection};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFaqRequest {
    #[validate(range(min = 1, message = "Category id must be a positive integer"))]
    #[schema(example = 1)]
    pub category_id: i32,
    /// One entry per language; a repeated language keeps the last entry
    #[validate(length(min = 1, message = "At least one translation is required"), nested)]
    pub translations: Vec<TranslationInput>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFaqRequest {
    /// Omit to keep the current category
    #[validate(range(min = 1, message = "Category id must be a positive integer"))]
    pub category_id: Option<i32>,
    /// Complete desired set; languages not listed are removed
    #[validate(length(min = 1, message = "At least one translation is required"), nested)]
    pub translations: Vec<TranslationInput>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FaqListQuery {
    /// Case-insensitive substring of any translation's question or answer
    pub search: Option<String>,
    /// Page number, 1-indexed
    pub page: Option<i64>,
    /// Items per page, 1..=100 (default 20)
    pub page_size: Option<i64>,
    /// `asc` or `desc` (default)
    pub sort: Option<String>,
}

impl FaqListQuery {
    fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page,
            self.page_size,
            SortDirection::parse(self.sort.as_deref()),
        )
    }
}

pub fn faq_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_faqs).post(create_faq))
        .route("/:id", get(get_faq).put(update_faq).delete(delete_faq))
}

/// List FAQs visible to the caller
#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = "FAQs",
    security(("bearer_auth" = [])),
    params(FaqListQuery),
    responses(
        (status = 200, description = "Page of visible FAQs", body = Vec<FaqResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_faqs(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FaqListQuery>,
) -> AppResult<ApiResponse<Vec<FaqResponse>>> {
    let page = query.page_request();
    let faqs = state.faq_service.list(identity, query.search, page).await?;
    Ok(ApiResponse::paginated(faqs.map(FaqResponse::from)))
}

/// Get an FAQ
#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    tag = "FAQs",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "FAQ ID")),
    responses(
        (status = 200, description = "FAQ with translations and category", body = FaqResponse),
        (status = 403, description = "Not visible to the caller"),
        (status = 404, description = "FAQ not found")
    )
)]
pub async fn get_faq(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<FaqResponse>> {
    let faq = state.faq_service.get(identity, id).await?;
    Ok(ApiResponse::success(faq.into()))
}

/// Create an FAQ: global for admins, store-scoped for merchants
#[utoipa::path(
    post,
    path = "/api/faqs",
    tag = "FAQs",
    security(("bearer_auth" = [])),
    request_body = CreateFaqRequest,
    responses(
        (status = 201, description = "FAQ created", body = FaqResponse),
        (status = 400, description = "Validation error, unknown category or merchant without store"),
        (status = 403, description = "Forbidden - Admin or merchant only")
    )
)]
pub async fn create_faq(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFaqRequest>,
) -> AppResult<Created<FaqResponse>> {
    require_staff(&identity)?;
    let faq = state
        .faq_service
        .create(
            identity,
            CreateFaq {
                category_id: payload.category_id,
                translations: payload.translations,
            },
        )
        .await?;

    Ok(Created(faq.into()))
}

/// Replace an FAQ's category and translation set
#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    tag = "FAQs",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "FAQ ID")),
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "FAQ updated", body = FaqResponse),
        (status = 400, description = "Validation error or unknown category"),
        (status = 403, description = "Caller may not manage this FAQ"),
        (status = 404, description = "FAQ not found")
    )
)]
pub async fn update_faq(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateFaqRequest>,
) -> AppResult<ApiResponse<FaqResponse>> {
    require_staff(&identity)?;
    let faq = state
        .faq_service
        .update(
            identity,
            id,
            UpdateFaq {
                category_id: payload.category_id,
                translations: payload.translations,
            },
        )
        .await?;

    Ok(ApiResponse::success(faq.into()))
}

/// Delete an FAQ and its translations
#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    tag = "FAQs",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "FAQ ID")),
    responses(
        (status = 204, description = "FAQ deleted"),
        (status = 403, description = "Caller may not manage this FAQ"),
        (status = 404, description = "FAQ not found")
    )
)]
pub async fn delete_faq(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    require_staff(&identity)?;
    state.faq_service.delete(identity, id).await?;
    Ok(NoContent)
}
