//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::api::AppState;
use crate::domain::Identity;
use crate::errors::{AppError, AppResult};

/// JWT authentication middleware.
///
/// Validates the bearer token and injects the caller's [`Identity`] into
/// the request extensions. No token, or an invalid one, is `Unauthorized`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(bearer.token())?;
    let identity = claims.identity()?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Require admin role, returns Forbidden error if not admin.
pub fn require_admin(identity: &Identity) -> AppResult<()> {
    if identity.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require admin or merchant role.
pub fn require_staff(identity: &Identity) -> AppResult<()> {
    if identity.role.is_staff() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
