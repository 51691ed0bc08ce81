//! Repository for the `projects` table.

use docket_core::types::RecordId;
use sqlx::types::Json;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, categories";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a freshly assigned id, returning the row.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, name, categories)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(RecordId::new_v4())
            .bind(&input.name)
            .bind(Json(input.categories.clone().unwrap_or_default()))
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &DbPool, id: RecordId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY rowid");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List projects where any category label contains `fragment` as a
    /// case-sensitive substring.
    pub async fn list_by_category(
        pool: &DbPool,
        fragment: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        // instr() keeps the match case-sensitive; LIKE would fold ASCII case.
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE EXISTS (
                 SELECT 1 FROM json_each(projects.categories)
                  WHERE instr(json_each.value, ?1) > 0
             )
             ORDER BY rowid"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(fragment)
            .fetch_all(pool)
            .await
    }

    /// Rewrite a project's name in place.
    ///
    /// Returns `None` if no row with the given `id` exists. Categories are
    /// left untouched.
    pub async fn update(
        pool: &DbPool,
        id: RecordId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET name = ?2
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id, returning the removed row's prior state.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &DbPool, id: RecordId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "DELETE FROM projects
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
