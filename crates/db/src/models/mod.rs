//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the row is not safe to expose directly, a `Serialize` response view

pub mod project;
pub mod user;
