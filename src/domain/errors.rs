//! Domain errors for cdash-verify.
//!
//! Missing, incomplete and failing builds are not errors: they are reported as
//! data ([`Verdict`](crate::domain::models::Verdict) and
//! [`MissingBuildResult`](crate::domain::models::MissingBuildResult)). The
//! variants below cover inputs that make an operation impossible to carry out.

use std::path::PathBuf;

use thiserror::Error;

/// Render a column list as `a, b, c` for header-mismatch messages.
fn format_columns(columns: &[String]) -> String {
    columns.join(", ")
}

/// Domain-level errors that can occur while querying and evaluating builds.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Build in group '{group}' is missing required field '{field}'")]
    MissingBuildField { group: String, field: &'static str },

    #[error("Failed to decode dashboard payload: {0}")]
    PayloadDecode(String),

    #[error(
        "Error, the CSV file '{}' has header columns [{}] which do not match the expected columns [{}]",
        path.display(),
        format_columns(found),
        format_columns(expected)
    )]
    CsvHeaderMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error(
        "Error, the CSV file '{}' line {line} has {found} fields but the header has {expected}",
        path.display()
    )]
    CsvRowLength {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Error, the CSV file '{}' has no header row", .0.display())]
    EmptyCsv(PathBuf),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Dashboard fetch failed for '{url}': {reason}")]
    Fetch { url: String, reason: String },

    #[error("Failed to read cached dashboard data from '{}': {reason}", path.display())]
    CacheRead { path: PathBuf, reason: String },

    #[error("Failed to write cached dashboard data to '{}': {reason}", path.display())]
    CacheWrite { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
