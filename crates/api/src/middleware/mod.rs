//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller's identity from a JWT Bearer token.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.
//! - [`rbac::RequireAdmin`] -- Requires the admin flag.

pub mod auth;
pub mod rbac;
