//! CLI command implementations.

pub mod check;
pub mod missing;
pub mod urls;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::adapters::cdash::CdashHttpFetcher;
use crate::domain::models::{Config, DashboardQuery, QueryDate};
use crate::services::CacheGate;

/// Build the dashboard query for `date` from the loaded configuration.
///
/// `use_cache` from the command line is combined with `cache.use_cached`.
pub(crate) fn dashboard_query(
    config: &Config,
    date: QueryDate,
    use_cache: bool,
) -> Result<DashboardQuery> {
    let query = DashboardQuery::new(
        &config.dashboard.url,
        &config.dashboard.project,
        date,
        &config.dashboard.filter_fields,
    );
    let use_cached = use_cache || config.cache.use_cached;
    match &config.cache.dir {
        Some(dir) => Ok(query.with_cache(dir, use_cached)),
        None if use_cached => bail!("Reading from the cache requires cache.dir or --cache-dir"),
        None => Ok(query),
    }
}

/// HTTP-backed cache gate using the configured timeout.
pub(crate) fn http_gate(config: &Config) -> Result<CacheGate> {
    let fetcher = CdashHttpFetcher::new(Duration::from_secs(config.dashboard.timeout_secs))
        .context("Failed to create CDash client")?;
    Ok(CacheGate::new(Arc::new(fetcher)))
}
