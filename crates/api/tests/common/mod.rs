//! Shared helpers for HTTP-level integration tests.
//!
//! Each test builds the full application router over a fresh in-memory
//! database and drives it with `tower::ServiceExt::oneshot`, so no TCP
//! listener is involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use docket_api::auth::jwt::{generate_token, JwtConfig};
use docket_api::auth::password::hash_password;
use docket_api::config::ServerConfig;
use docket_api::router::build_app_router;
use docket_api::state::AppState;
use docket_db::models::project::{CreateProject, Project};
use docket_db::models::user::{CreateUser, User};
use docket_db::repositories::{ProjectRepo, UserRepo};
use docket_db::DbPool;

/// Password used for every fixture user.
pub const TEST_PASSWORD: &str = "test_password_123";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_hours: 1,
        },
    }
}

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

/// Build the full application router over the given pool.
///
/// Uses [`build_app_router`] so tests exercise the same middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) that production uses.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user whose password is [`TEST_PASSWORD`], returning the row.
pub async fn create_test_user(pool: &DbPool, email: &str, is_admin: bool) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash,
            is_admin,
        },
    )
    .await
    .expect("user fixture should insert")
}

/// Sign a bearer token for the given user with the test JWT config.
pub fn auth_token_for(user: &User) -> String {
    generate_token(user.id, user.is_admin, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Insert a project row directly, bypassing the HTTP layer.
pub async fn seed_project(pool: &DbPool, name: &str, categories: &[&str]) -> Project {
    ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
            categories: Some(categories.iter().map(|c| c.to_string()).collect()),
        },
    )
    .await
    .expect("project fixture should insert")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request)
        .await
        .expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send a GET with a raw `Authorization` header value (no Bearer prefix added).
pub async fn get_with_auth_header(app: Router, uri: &str, header_value: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, header_value)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request)
        .await
        .expect("request should not fail")
}

/// Collect and parse a JSON response body.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
