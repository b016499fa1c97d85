//! Orchestration of the extract → gate → evaluate pipeline.
//!
//! [`verify`] is the pure composition over an already-resolved payload.
//! [`download_builds_and_summarize`] and [`query_and_determine_pass_fail`] add
//! the dashboard round trip through the [`CacheGate`].

use crate::domain::errors::DomainResult;
use crate::domain::models::{BuildSummary, DashboardQuery, RawIndexPayload, Verdict};
use crate::services::cache_gate::CacheGate;
use crate::services::evaluator::{all_pass, build_names};
use crate::services::extractor::{decode_payload, extract_all};
use crate::services::matcher::all_expected_exist;
use crate::services::query_url::index_query_url;

/// Decide pass/fail for a payload against expected build names.
///
/// The existence gate runs first; a missing build is reported before any
/// build failure.
pub fn verify<S: AsRef<str>>(
    payload: &RawIndexPayload,
    expected_build_names: &[S],
) -> DomainResult<Verdict> {
    let summaries = extract_all(payload)?;
    Ok(verify_summaries(&summaries, expected_build_names))
}

/// [`verify`] over summaries that were already extracted.
pub fn verify_summaries<S: AsRef<str>>(
    summaries: &[BuildSummary],
    expected_build_names: &[S],
) -> Verdict {
    let names = build_names(summaries);
    let existence = all_expected_exist(&names, expected_build_names);
    if !existence.passed {
        return existence;
    }
    all_pass(summaries)
}

/// Query the dashboard index for `query` and summarize every build.
pub async fn download_builds_and_summarize(
    gate: &CacheGate,
    query: &DashboardQuery,
) -> DomainResult<Vec<BuildSummary>> {
    let url = index_query_url(
        &query.cdash_url,
        &query.project,
        &query.date.as_query_str(),
        &query.filter_fields,
    );
    let cache_file = query.index_cache_file();
    let raw = gate
        .get_or_fetch(&url, cache_file.as_deref(), query.use_cached)
        .await?;
    let payload = decode_payload(raw)?;
    let summaries = extract_all(&payload)?;
    tracing::info!(
        project = %query.project,
        date = %query.date.as_query_str(),
        builds = summaries.len(),
        "downloaded build summaries"
    );
    Ok(summaries)
}

/// Query the dashboard and decide pass/fail against expected build names.
pub async fn query_and_determine_pass_fail<S: AsRef<str>>(
    gate: &CacheGate,
    query: &DashboardQuery,
    expected_build_names: &[S],
) -> DomainResult<Verdict> {
    let summaries = download_builds_and_summarize(gate, query).await?;
    let verdict = verify_summaries(&summaries, expected_build_names);
    if verdict.passed {
        tracing::info!(builds = summaries.len(), "all expected builds exist and pass");
    } else {
        tracing::warn!(message = %verdict.message, "verification failed");
    }
    Ok(verdict)
}
