//! Project entity model and DTOs.

use docket_core::types::RecordId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Serializes the identifier as `_id`, which is the field name API clients
/// key on. `categories` is omitted from JSON when empty.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    #[sqlx(json)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

/// DTO for creating a new project. The identifier is store-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    /// Optional category labels; defaults to none.
    pub categories: Option<Vec<String>>,
}

/// DTO for updating an existing project. Only the name is rewritable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
}
