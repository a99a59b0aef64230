//! Single-translation handlers (admin or merchant).

use axum::{
    extract::{Extension, Path, State},
    routing::{post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::require_staff;
use crate::api::AppState;
use crate::domain::{Identity, TranslationInput, TranslationResponse};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, NoContent};

/// Mounted under `/api`
pub fn translation_routes() -> Router<AppState> {
    Router::new()
        .route("/faqs/:id/translations", post(add_translation))
        .route(
            "/translations/:id",
            put(update_translation).delete(delete_translation),
        )
}

/// Add a translation in a language the FAQ does not have yet
#[utoipa::path(
    post,
    path = "/api/faqs/{id}/translations",
    tag = "Translations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "FAQ ID")),
    request_body = TranslationInput,
    responses(
        (status = 201, description = "Translation added", body = TranslationResponse),
        (status = 403, description = "Caller may not manage this FAQ"),
        (status = 404, description = "FAQ not found"),
        (status = 409, description = "Language already present")
    )
)]
pub async fn add_translation(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(faq_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<TranslationInput>,
) -> AppResult<Created<TranslationResponse>> {
    require_staff(&identity)?;
    let translation = state
        .translation_service
        .add(identity, faq_id, payload)
        .await?;
    Ok(Created(translation.into()))
}

/// Overwrite a translation
#[utoipa::path(
    put,
    path = "/api/translations/{id}",
    tag = "Translations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Translation ID")),
    request_body = TranslationInput,
    responses(
        (status = 200, description = "Translation updated", body = TranslationResponse),
        (status = 403, description = "Caller may not manage the parent FAQ"),
        (status = 404, description = "Translation not found"),
        (status = 409, description = "Language already present on the FAQ")
    )
)]
pub async fn update_translation(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<TranslationInput>,
) -> AppResult<ApiResponse<TranslationResponse>> {
    require_staff(&identity)?;
    let translation = state
        .translation_service
        .update(identity, id, payload)
        .await?;
    Ok(ApiResponse::success(translation.into()))
}

/// Delete a translation
#[utoipa::path(
    delete,
    path = "/api/translations/{id}",
    tag = "Translations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Translation ID")),
    responses(
        (status = 204, description = "Translation deleted"),
        (status = 403, description = "Caller may not manage the parent FAQ"),
        (status = 404, description = "Translation not found")
    )
)]
pub async fn delete_translation(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    require_staff(&identity)?;
    state.translation_service.delete(identity, id).await?;
    Ok(NoContent)
}
