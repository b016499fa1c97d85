//! `check`: pass/fail verdict for one testing day.

use anyhow::{Context, Result};
use serde::Serialize;

use super::{dashboard_query, http_gate};
use crate::cli::output::{action_failure, action_success, output, CommandOutput};
use crate::cli::types::CheckArgs;
use crate::domain::models::Config;
use crate::services::{query_and_determine_pass_fail, QueryUrls};

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub project: String,
    pub date: String,
    pub passed: bool,
    pub message: String,
    pub dashboard_url: String,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let headline = if self.passed {
            action_success(&format!(
                "PASS: all builds for {} on {} exist and pass",
                self.project, self.date
            ))
        } else {
            action_failure(&format!("FAIL: {}", self.message))
        };
        format!("{headline}\nDashboard: {}", self.dashboard_url)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Returns whether the check passed.
pub async fn execute(args: CheckArgs, config: &Config, json_mode: bool) -> Result<bool> {
    let query = dashboard_query(config, args.date, args.use_cache)?;
    let gate = http_gate(config)?;

    let verdict = query_and_determine_pass_fail(&gate, &query, &args.expect)
        .await
        .with_context(|| {
            format!(
                "Failed to check builds for {} on {}",
                query.project,
                query.date.as_query_str()
            )
        })?;

    let date = query.date.as_query_str();
    let urls = QueryUrls::new(&query.cdash_url, &query.project, &date, &query.filter_fields);
    let out = CheckOutput {
        project: query.project.clone(),
        date,
        passed: verdict.passed,
        message: verdict.message,
        dashboard_url: urls.index_browser,
    };
    output(&out, json_mode);
    Ok(out.passed)
}
