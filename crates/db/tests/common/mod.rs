use sqlx::sqlite::SqlitePoolOptions;

use docket_db::DbPool;

/// Fresh in-memory database with migrations applied.
///
/// Pinned to a single connection: every `:memory:` connection is its own
/// database, so a larger pool would hand out blank schemas.
pub async fn test_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    docket_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}
