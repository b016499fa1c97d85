//! Pass/fail evaluation of build summaries.
//!
//! Only a present, nonzero counter fails a build. A missing section means the
//! phase was not evaluated and never counts against the build.

use serde::Serialize;
use serde_json::Value;

use crate::domain::models::{BuildSummary, Verdict};

/// Whether every present status section of `summary` is clean.
pub fn build_passes(summary: &BuildSummary) -> bool {
    let update_ok = summary.update.is_none_or(|s| s.error_count == 0);
    let configure_ok = summary.configure.is_none_or(|s| s.error_count == 0);
    let compilation_ok = summary.compilation.is_none_or(|s| s.error_count == 0);
    let test_ok = summary
        .test
        .is_none_or(|s| s.fail_count == 0 && s.not_run_count == 0);

    update_ok && configure_ok && compilation_ok && test_ok
}

/// Evaluate summaries in order and stop at the first failure.
pub fn all_pass(summaries: &[BuildSummary]) -> Verdict {
    match summaries.iter().find(|s| !build_passes(s)) {
        Some(failed) => {
            tracing::info!(
                group = %failed.group,
                site = %failed.site,
                build = %failed.build_name,
                "build failed"
            );
            Verdict::fail(format!(
                "Error, the build {} failed!",
                canonical_string(failed)
            ))
        }
        None => Verdict::pass(),
    }
}

/// Build names in input order.
pub fn build_names(summaries: &[BuildSummary]) -> Vec<&str> {
    summaries.iter().map(|s| s.build_name.as_str()).collect()
}

/// Deterministic text form of any serializable record.
///
/// Object keys are sorted explicitly at every level so the output never
/// depends on map iteration order.
pub fn canonical_string<T: Serialize>(record: &T) -> String {
    match serde_json::to_value(record) {
        Ok(value) => {
            let mut out = String::new();
            write_canonical(&value, &mut out);
            out
        }
        Err(err) => format!("<unserializable: {err}>"),
    }
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, value)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push_str(": ");
                write_canonical(value, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
