//! Build extraction.
//!
//! Reduces the raw dashboard payload to [`BuildSummary`] records, keeping only
//! the identity fields and the counters the evaluator looks at.

use serde_json::Value;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    BuildSummary, CompilationStatus, ConfigureStatus, RawBuild, RawIndexPayload, TestStatus,
    UpdateStatus,
};

/// Decode a JSON payload into the typed raw shape.
pub fn decode_payload(value: Value) -> DomainResult<RawIndexPayload> {
    serde_json::from_value(value).map_err(|e| DomainError::PayloadDecode(e.to_string()))
}

/// Summarize one raw build found under `group`.
///
/// `group` always wins over anything the raw record carries. Only a missing
/// `site` or `buildname` is an error; absent sections stay absent.
pub fn extract(raw: &RawBuild, group: &str) -> DomainResult<BuildSummary> {
    let site = raw.site.clone().ok_or_else(|| DomainError::MissingBuildField {
        group: group.to_string(),
        field: "site",
    })?;
    let build_name = raw
        .build_name
        .clone()
        .ok_or_else(|| DomainError::MissingBuildField {
            group: group.to_string(),
            field: "buildname",
        })?;

    Ok(BuildSummary {
        group: group.to_string(),
        site,
        build_name,
        update: raw.update.map(|s| UpdateStatus {
            error_count: s.count(),
        }),
        configure: raw.configure.map(|s| ConfigureStatus {
            error_count: s.count(),
        }),
        compilation: raw.compilation.map(|s| CompilationStatus {
            error_count: s.count(),
        }),
        test: raw.test.map(|s| TestStatus {
            fail_count: s.fail_count(),
            not_run_count: s.not_run_count(),
        }),
    })
}

/// Summarize every build in payload order: groups in order, then builds
/// within each group in order.
pub fn extract_all(payload: &RawIndexPayload) -> DomainResult<Vec<BuildSummary>> {
    let mut summaries = Vec::new();
    for group in &payload.build_groups {
        for raw in &group.builds {
            summaries.push(extract(raw, &group.name)?);
        }
    }
    tracing::debug!(
        groups = payload.build_groups.len(),
        builds = summaries.len(),
        "extracted build summaries"
    );
    Ok(summaries)
}
