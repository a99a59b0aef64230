//! Public store handlers.

use axum::{
    extract::{Path, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    routing::get,
    Router,
};

use crate::api::extractors::ApiQuery;
use crate::api::AppState;
use crate::domain::fallback::preferred_language;
use crate::domain::{StoreSummary, StoreWithFaqs};
use crate::errors::AppResult;
use crate::types::{ApiResponse, PageRequest, PaginationParams};

pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores))
        .route("/:id", get(get_store))
}

/// List stores
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Stores",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of stores", body = Vec<StoreSummary>)
    )
)]
pub async fn list_stores(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<ApiResponse<Vec<StoreSummary>>> {
    let stores = state.store_service.list(PageRequest::from(&params)).await?;
    Ok(ApiResponse::paginated(stores))
}

/// Store page with its own and all global FAQs in the requested language
#[utoipa::path(
    get,
    path = "/api/stores/{id}",
    tag = "Stores",
    params(
        ("id" = i32, Path, description = "Store ID"),
        ("Accept-Language" = Option<String>, Header, description = "Preferred language, default `en`")
    ),
    responses(
        (status = 200, description = "Store with localized FAQs", body = StoreWithFaqs),
        (status = 404, description = "Store not found")
    )
)]
pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> AppResult<ApiResponse<StoreWithFaqs>> {
    let header = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    let language = preferred_language(header);

    let store = state.store_service.get_with_faqs(id, &language).await?;
    Ok(ApiResponse::success(store))
}
