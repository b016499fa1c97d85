//! Expected-builds source: a small comma-separated file with a header row.
//!
//! ```text
//! group, site, buildname
//! Nightly, host1, gcc-debug
//! ```
//!
//! Whitespace around fields is trimmed and blank lines are skipped. Quoting is
//! not supported; fields cannot contain commas.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::ExpectedBuildKey;

/// One data row keyed by header column name.
pub type CsvRow = BTreeMap<String, String>;

/// Columns an expected-builds file must have.
pub const EXPECTED_BUILDS_COLUMNS: [&str; 3] = ["group", "site", "buildname"];

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}

/// Parse CSV `content` read from `path` (used only for error messages).
///
/// With `expected_columns`, the header must hold exactly those names in any
/// order. Every data row must have as many fields as the header.
pub fn parse_csv(
    content: &str,
    path: &Path,
    expected_columns: Option<&[&str]>,
) -> DomainResult<Vec<CsvRow>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return Err(DomainError::EmptyCsv(path.to_path_buf()));
    };
    let header = split_fields(header_line);

    if let Some(expected) = expected_columns {
        let mut found_sorted: Vec<&str> = header.iter().map(String::as_str).collect();
        found_sorted.sort_unstable();
        let mut expected_sorted = expected.to_vec();
        expected_sorted.sort_unstable();
        if found_sorted != expected_sorted {
            return Err(DomainError::CsvHeaderMismatch {
                path: path.to_path_buf(),
                expected: expected.iter().map(|c| (*c).to_string()).collect(),
                found: header,
            });
        }
    }

    lines
        .map(|(line_number, line)| {
            let fields = split_fields(line);
            if fields.len() != header.len() {
                return Err(DomainError::CsvRowLength {
                    path: path.to_path_buf(),
                    line: line_number,
                    expected: header.len(),
                    found: fields.len(),
                });
            }
            Ok(header.iter().cloned().zip(fields).collect())
        })
        .collect()
}

/// Read and parse a CSV file.
pub async fn read_csv_file(
    path: impl AsRef<Path>,
    expected_columns: Option<&[&str]>,
) -> DomainResult<Vec<CsvRow>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_csv(&content, path, expected_columns)
}

/// Convert rows with `group`, `site` and `buildname` columns into keys.
pub fn rows_to_expected_builds(rows: &[CsvRow]) -> Vec<ExpectedBuildKey> {
    let field = |row: &CsvRow, name: &str| row.get(name).cloned().unwrap_or_default();
    rows.iter()
        .map(|row| {
            ExpectedBuildKey::new(
                field(row, "group"),
                field(row, "site"),
                field(row, "buildname"),
            )
        })
        .collect()
}

/// Load the expected builds declared in a CSV file.
pub async fn expected_builds_from_csv(path: impl AsRef<Path>) -> DomainResult<Vec<ExpectedBuildKey>> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let rows = read_csv_file(&path, Some(&EXPECTED_BUILDS_COLUMNS)).await?;
    tracing::debug!(path = %path.display(), builds = rows.len(), "loaded expected builds");
    Ok(rows_to_expected_builds(&rows))
}
