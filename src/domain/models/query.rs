use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::query_date::QueryDate;

/// File name used for the cached index query inside a cache directory.
pub const INDEX_CACHE_FILE_NAME: &str = "fullCDashIndexBuilds.json";

/// One dashboard query: which project, which day, which filters, and how to
/// treat the on-disk cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub cdash_url: String,
    pub project: String,
    pub date: QueryDate,
    pub filter_fields: String,
    pub cache_dir: Option<PathBuf>,
    pub use_cached: bool,
}

impl DashboardQuery {
    pub fn new(
        cdash_url: impl Into<String>,
        project: impl Into<String>,
        date: QueryDate,
        filter_fields: impl Into<String>,
    ) -> Self {
        Self {
            cdash_url: cdash_url.into(),
            project: project.into(),
            date,
            filter_fields: filter_fields.into(),
            cache_dir: None,
            use_cached: false,
        }
    }

    #[must_use]
    pub fn with_cache(mut self, cache_dir: impl Into<PathBuf>, use_cached: bool) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self.use_cached = use_cached;
        self
    }

    /// Cache file for the index query, if caching is configured.
    pub fn index_cache_file(&self) -> Option<PathBuf> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join(INDEX_CACHE_FILE_NAME))
    }
}
