//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Every write uses
//! `RETURNING` so it stays a single store round-trip.

pub mod project_repo;
pub mod user_repo;

pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
