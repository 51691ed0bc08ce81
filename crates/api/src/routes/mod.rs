pub mod auth;
pub mod health;
pub mod project;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the server root).
///
/// Route hierarchy:
///
/// ```text
/// /auth                          login (public)
///
/// /users                         register (public)
/// /users/me                      current user (requires auth)
///
/// /projects                      list (public), create (requires auth)
/// /projects/categories/{name}    list by category label (public)
/// /projects/{id}                 get (public), update (auth), delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login).
        .nest("/auth", auth::router())
        // User registration and self-lookup.
        .nest("/users", user::router())
        // Project records.
        .nest("/projects", project::router())
}
