//! Port trait definitions (Hexagonal Architecture)
//!
//! - DashboardFetcher: retrieval of raw dashboard query responses
//!
//! Keeping the fetch behind a trait lets the evaluation engine run against
//! canned payloads as easily as against a live CDash site.

pub mod fetcher;

pub use fetcher::{DashboardFetcher, StaticFetcher};
