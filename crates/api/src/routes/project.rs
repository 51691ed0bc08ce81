//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create (requires auth)
/// GET    /categories/{name}   -> list_by_category
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update (requires auth)
/// DELETE /{id}                -> delete (requires admin)
/// ```
///
/// `/categories/{name}` uses a static first segment, so it takes precedence
/// over the `/{id}` parameter route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/categories/{name}", get(project::list_by_category))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
