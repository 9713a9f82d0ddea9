//! # solace_core
//!
//! Core domain logic for Solace.

pub mod affirmations;
pub mod auth;
pub mod completion;
pub mod journal;
pub mod migrate;
pub mod models;
pub mod uuid;
pub mod wellness;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
