//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /     -> register (public)
/// GET  /me   -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::register))
        .route("/me", get(user::me))
}
