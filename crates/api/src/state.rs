use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: docket_db::DbPool,
    /// Server configuration (JWT settings, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
}
