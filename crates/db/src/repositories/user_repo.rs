//! Repository for the `users` table.

use docket_core::types::RecordId;

use crate::models::user::{CreateUser, User};
use crate::DbPool;

const COLUMNS: &str = "id, name, email, password_hash, is_admin";

/// Provides persistence operations for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a freshly assigned id, returning the row.
    ///
    /// Fails with a unique constraint violation if the email is taken.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, name, email, password_hash, is_admin)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(RecordId::new_v4())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &DbPool, id: RecordId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email. Used for login and duplicate checks.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
