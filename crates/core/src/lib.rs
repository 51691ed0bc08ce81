//! Domain types, validation rules, and the error taxonomy shared by the
//! docket crates.
//!
//! Everything in here is pure: no I/O, no framework types. The API and
//! persistence crates depend on this one, never the other way around.

pub mod error;
pub mod project;
pub mod types;
pub mod user;
