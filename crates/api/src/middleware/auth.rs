//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use docket_core::error::CoreError;
use docket_core::types::RecordId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that needs to know who
/// is calling:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's record id (from `claims.sub`).
    pub user_id: RecordId,
    /// Whether the user holds the admin flag (from `claims.is_admin`).
    pub is_admin: bool,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        // A blank header counts as no credential at all, while a non-Bearer
        // scheme counts as a malformed one.
        if auth_header.trim().is_empty() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Empty Authorization header".into(),
            )));
        }

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::InvalidCredential(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if token.trim().is_empty() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Empty bearer token".into(),
            )));
        }

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::InvalidCredential(
                "Invalid or expired token".into(),
            ))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            is_admin: claims.is_admin,
        })
    }
}
