//! cdash-verify - CDash build verification
//!
//! Queries a CDash dashboard for one project and testing day, normalizes every
//! reported build into a [`BuildSummary`], and answers two questions: do the
//! builds we expect exist (with test results), and did every build pass?
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and the fetcher port
//! - **Service Layer** (`services`): extraction, indexing, matching, evaluation
//!   and report rendering
//! - **Adapters** (`adapters`): the reqwest-backed CDash client
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use cdash_verify::{CacheGate, CdashHttpFetcher, DashboardQuery, QueryDate};
//! use cdash_verify::services::query_and_determine_pass_fail;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = CdashHttpFetcher::new(Duration::from_secs(60))?;
//!     let gate = CacheGate::new(Arc::new(fetcher));
//!     let query = DashboardQuery::new(
//!         "https://my.cdash.org",
//!         "MyProject",
//!         QueryDate::parse("2024-03-01")?,
//!         "",
//!     );
//!     let verdict = query_and_determine_pass_fail(&gate, &query, &["gcc-debug"]).await?;
//!     println!("passed: {}", verdict.passed);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cdash::CdashHttpFetcher;
pub use domain::models::{
    BuildSummary, Config, DashboardQuery, ExpectedBuildKey, MissingBuildResult, MissingStatus,
    QueryDate, RawIndexPayload, Verdict,
};
pub use domain::ports::{DashboardFetcher, StaticFetcher};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::{LogConfig, LoggerImpl};
pub use services::{BuildIndex, CacheGate};
