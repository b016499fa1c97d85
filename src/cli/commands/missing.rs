//! `missing`: compare expected builds against the dashboard and report gaps.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use serde::Serialize;

use super::{dashboard_query, http_gate};
use crate::cli::display::{list_table, render_list};
use crate::cli::output::{action_failure, action_success, output, CommandOutput};
use crate::cli::types::MissingArgs;
use crate::domain::models::{BuildSummary, Config, MissingBuildResult};
use crate::services::html_table::escape_html;
use crate::services::{
    all_pass, build_passes, download_builds_and_summarize, expected_builds_from_csv,
    find_missing, render_summary_table, rows_from, BuildIndex, CellAlign, QueryUrls,
    SummaryTableSpec, TableColumn, TableStyle,
};

/// Flattened failing build for listings and report rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailingBuildRow {
    pub group: String,
    pub site: String,
    pub build_name: String,
    pub update_errors: Option<i64>,
    pub configure_errors: Option<i64>,
    pub compilation_errors: Option<i64>,
    pub tests_failed: Option<i64>,
    pub tests_not_run: Option<i64>,
}

impl From<&BuildSummary> for FailingBuildRow {
    fn from(summary: &BuildSummary) -> Self {
        Self {
            group: summary.group.clone(),
            site: summary.site.clone(),
            build_name: summary.build_name.clone(),
            update_errors: summary.update.map(|s| s.error_count),
            configure_errors: summary.configure.map(|s| s.error_count),
            compilation_errors: summary.compilation.map(|s| s.error_count),
            tests_failed: summary.test.map(|s| s.fail_count),
            tests_not_run: summary.test.map(|s| s.not_run_count),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingOutput {
    pub project: String,
    pub date: String,
    pub total_builds: usize,
    pub expected_builds: usize,
    pub missing: Vec<MissingBuildResult>,
    pub failing: Vec<FailingBuildRow>,
    pub verdict_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_report: Option<String>,
}

impl MissingOutput {
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.failing.is_empty()
    }
}

fn display_count(count: Option<i64>) -> String {
    count.map_or_else(|| "-".to_string(), |c| c.to_string())
}

impl CommandOutput for MissingOutput {
    fn to_human(&self) -> String {
        let mut sections = Vec::new();

        let mut missing_table = list_table(&["Group", "Site", "Build Name", "Status"]);
        for m in &self.missing {
            missing_table.add_row(vec![
                m.group.clone(),
                m.site.clone(),
                m.build_name.clone(),
                m.status.to_string(),
            ]);
        }
        sections.push(render_list("missing build", &missing_table, self.missing.len()));

        let mut failing_table: Table =
        list_table(&[
            "Group", "Site", "Build Name", "Update", "Config", "Build", "Fail", "Not Run",
        ]);
        for f in &self.failing {
            failing_table.add_row(vec![
                f.group.clone(),
                f.site.clone(),
                f.build_name.clone(),
                display_count(f.update_errors),
                display_count(f.configure_errors),
                display_count(f.compilation_errors),
                display_count(f.tests_failed),
                display_count(f.tests_not_run),
            ]);
        }
        sections.push(render_list("failing build", &failing_table, self.failing.len()));

        if !self.verdict_message.is_empty() {
            sections.push(self.verdict_message.clone());
        }

        let summary = format!(
            "{} of {} expected builds have test results ({} builds for {} on {})",
            self.expected_builds.saturating_sub(self.missing.len()),
            self.expected_builds,
            self.total_builds,
            self.project,
            self.date
        );
        sections.push(if self.passed() {
            action_success(&summary)
        } else {
            action_failure(&summary)
        });

        if let Some(path) = &self.html_report {
            sections.push(format!("HTML report: {path}"));
        }
        sections.join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn missing_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("group", "Group"),
        TableColumn::new("site", "Site"),
        TableColumn::new("buildName", "Build Name"),
        TableColumn::new("status", "Missing Status"),
    ]
}

fn failing_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("group", "Group"),
        TableColumn::new("site", "Site"),
        TableColumn::new("buildName", "Build Name"),
        TableColumn::new("updateErrors", "Update Errors").align(CellAlign::Right),
        TableColumn::new("configureErrors", "Configure Errors").align(CellAlign::Right),
        TableColumn::new("compilationErrors", "Build Errors").align(CellAlign::Right),
        TableColumn::new("testsFailed", "Tests Failed").align(CellAlign::Right),
        TableColumn::new("testsNotRun", "Tests Not Run").align(CellAlign::Right),
    ]
}

/// Build the HTML report page for a `missing` run.
pub fn render_report(
    out: &MissingOutput,
    dashboard_url: &str,
    limit: usize,
) -> crate::domain::DomainResult<String> {
    let style = TableStyle::default();
    let sort_keys = ["group", "site", "buildName"];

    let missing_spec = SummaryTableSpec::new("Builds Missing", "bm")
        .sort_by(sort_keys)
        .limit(Some(limit));
    let failing_spec = SummaryTableSpec::new("Builds Failing", "bf")
        .sort_by(sort_keys)
        .limit(Some(limit));

    let mut html = format!(
        "<h2>Build results for {} on {}</h2>\n<p><a href=\"{}\">Dashboard</a></p>\n",
        escape_html(&out.project),
        escape_html(&out.date),
        escape_html(dashboard_url)
    );
    html.push_str(&render_summary_table(
        &missing_spec,
        &missing_columns(),
        &rows_from(&out.missing)?,
        &style,
    ));
    html.push_str(&render_summary_table(
        &failing_spec,
        &failing_columns(),
        &rows_from(&out.failing)?,
        &style,
    ));
    if out.passed() {
        html.push_str("<p>All expected builds exist and pass.</p>\n");
    }
    Ok(html)
}

/// Relative report paths land under `report.output_dir`.
fn report_path(config: &Config, requested: &Path) -> PathBuf {
    if requested.is_absolute() {
        requested.to_path_buf()
    } else {
        Path::new(&config.report.output_dir).join(requested)
    }
}

async fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write HTML report to {}", path.display()))
}

/// Returns whether every expected build exists with test results and every
/// build passes.
pub async fn execute(args: MissingArgs, config: &Config, json_mode: bool) -> Result<bool> {
    let expected = expected_builds_from_csv(&args.expected_builds)
        .await
        .with_context(|| {
            format!(
                "Failed to read expected builds from {}",
                args.expected_builds.display()
            )
        })?;

    let query = dashboard_query(config, args.date, args.use_cache)?;
    let gate = http_gate(config)?;
    let summaries = download_builds_and_summarize(&gate, &query)
        .await
        .context("Failed to download build summaries")?;

    let index = BuildIndex::build(&summaries);
    let missing = find_missing(&index, &expected);
    let verdict = all_pass(&summaries);
    let failing: Vec<FailingBuildRow> = summaries
        .iter()
        .filter(|s| !build_passes(s))
        .map(FailingBuildRow::from)
        .collect();

    let date = query.date.as_query_str();
    let mut out = MissingOutput {
        project: query.project.clone(),
        date: date.clone(),
        total_builds: index.len(),
        expected_builds: expected.len(),
        missing,
        failing,
        verdict_message: verdict.message,
        html_report: None,
    };

    if let Some(requested) = &args.html {
        let path = report_path(config, requested);
        let urls = QueryUrls::new(&query.cdash_url, &query.project, &date, &query.filter_fields);
        let limit = args.limit.unwrap_or(config.report.limit_rows);
        let html = render_report(&out, &urls.index_browser, limit)
            .context("Failed to render HTML report")?;
        write_report(&path, &html).await?;
        tracing::info!(path = %path.display(), "wrote HTML report");
        out.html_report = Some(path.display().to_string());
    }

    output(&out, json_mode);
    Ok(out.passed())
}
