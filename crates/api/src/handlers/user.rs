//! Handlers for the `/users` resource (registration, current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use docket_core::error::CoreError;
use docket_core::user::{validate_email, validate_user_name, PASSWORD_MIN_CHARS};
use docket_db::models::user::{CreateUser, UserResponse};
use docket_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /users
///
/// Register a new account. Accounts are never created with the admin flag;
/// it can only be granted directly in the store.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let name = input.name.trim().to_string();
    let email = input.email.trim().to_string();

    validate_user_name(&name)?;
    validate_email(&email)?;
    validate_password_strength(&input.password, PASSWORD_MIN_CHARS)
        .map_err(CoreError::Validation)?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name,
            email,
            password_hash,
            is_admin: false,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/me
///
/// Return the authenticated user's own record.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user.user_id.to_string(),
            })
        })?;
    Ok(Json(record.into()))
}
