//! Domain layer for cdash-verify
//!
//! This module contains the build models, error types and the ports that
//! infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult};
