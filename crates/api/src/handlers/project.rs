//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::Json;
use docket_core::error::CoreError;
use docket_core::project::validate_project_name;
use docket_core::types::RecordId;
use docket_db::models::project::{CreateProject, Project, UpdateProject};
use docket_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Parse a raw path segment into a [`RecordId`].
///
/// A malformed id is reported as 404 rather than 400: from the client's
/// point of view there is simply no record at that path.
fn parse_project_id(raw: &str) -> Result<RecordId, AppError> {
    RecordId::parse_str(raw).map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: raw.to_string(),
        })
    })
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /projects/categories/{name}
///
/// Lists projects with at least one category label containing `name` as a
/// case-sensitive substring.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_category(&state.pool, &name).await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = parse_project_id(&id)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: id.to_string(),
            })
        })?;
    Ok(Json(project))
}

/// POST /projects
///
/// Requires authentication. Returns the stored record.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<Project>> {
    let name = input.name.trim().to_string();
    validate_project_name(&name)?;

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            name,
            categories: input.categories,
        },
    )
    .await?;

    tracing::info!(project_id = %project.id, user_id = %user.user_id, "Project created");
    Ok(Json(project))
}

/// PUT /projects/{id}
///
/// Requires authentication. Replaces the project's name.
pub async fn update(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    // Resolve the path id before touching the body so a malformed id reports
    // 404 even when the payload is also invalid.
    let id = parse_project_id(&id)?;

    let name = input.name.trim().to_string();
    validate_project_name(&name)?;

    let project = ProjectRepo::update(&state.pool, id, &UpdateProject { name })
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: id.to_string(),
            })
        })?;
    Ok(Json(project))
}

/// DELETE /projects/{id}
///
/// Admin only. Returns the record as it existed before deletion.
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = parse_project_id(&id)?;
    let project = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: id.to_string(),
            })
        })?;

    tracing::info!(project_id = %project.id, user_id = %user.user_id, "Project deleted");
    Ok(Json(project))
}
