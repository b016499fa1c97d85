pub mod build;
pub mod config;
pub mod payload;
pub mod query;
pub mod query_date;

pub use build::{
    BuildSummary, CompilationStatus, ConfigureStatus, ExpectedBuildKey, MissingBuildResult,
    MissingStatus, TestStatus, UpdateStatus, Verdict,
};
pub use config::{CacheConfig, Config, DashboardConfig, LoggingConfig, ReportConfig};
pub use payload::{RawBuild, RawBuildGroup, RawErrorSection, RawIndexPayload, RawTestSection};
pub use query::{DashboardQuery, INDEX_CACHE_FILE_NAME};
pub use query_date::QueryDate;
