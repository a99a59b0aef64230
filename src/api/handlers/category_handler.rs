//! FAQ category handlers. Reads are open to any signed-in user, writes to admins.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{ApiQuery, ValidatedJson};
use crate::api::middleware::require_admin;
use crate::api::AppState;
use crate::domain::{Category, Identity};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, NoContent};

/// Category create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Shipping")]
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategorySearch {
    /// Case-insensitive substring of the category name
    pub search: Option<String>,
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// List categories
#[utoipa::path(
    get,
    path = "/api/faq-categories",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(CategorySearch),
    responses(
        (status = 200, description = "Categories ordered by id", body = Vec<Category>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CategorySearch>,
) -> AppResult<ApiResponse<Vec<Category>>> {
    let categories = state.category_service.list(query.search).await?;
    Ok(ApiResponse::success(categories))
}

/// Get a category
#[utoipa::path(
    get,
    path = "/api/faq-categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<Category>> {
    let category = state.category_service.get(id).await?;
    Ok(ApiResponse::success(category))
}

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "/api/faq-categories",
    tag = "Categories",
    security(("bearer_auth" = [])),
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_category(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryRequest>,
) -> AppResult<Created<Category>> {
    require_admin(&identity)?;
    let category = state.category_service.create(payload.name).await?;
    Ok(Created(category))
}

/// Rename a category (admin only)
#[utoipa::path(
    put,
    path = "/api/faq-categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CategoryRequest>,
) -> AppResult<ApiResponse<Category>> {
    require_admin(&identity)?;
    let category = state.category_service.update(id, payload.name).await?;
    Ok(ApiResponse::success(category))
}

/// Delete a category (admin only); FAQs referencing it are kept
#[utoipa::path(
    delete,
    path = "/api/faq-categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    require_admin(&identity)?;
    state.category_service.delete(id).await?;
    Ok(NoContent)
}
