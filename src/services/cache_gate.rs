//! Cache gate in front of the dashboard fetcher.
//!
//! Decides per call whether raw dashboard data comes from the fetcher or from
//! a previously written JSON file, and persists freshly fetched data so a
//! later run can replay it without network access.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tokio::fs;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::DashboardFetcher;

/// Fetch-or-load front end for a [`DashboardFetcher`].
#[derive(Clone)]
pub struct CacheGate {
    fetcher: Arc<dyn DashboardFetcher>,
}

impl CacheGate {
    pub fn new(fetcher: Arc<dyn DashboardFetcher>) -> Self {
        Self { fetcher }
    }

    /// Return the raw payload for `query_url`.
    ///
    /// - `use_cache` with a cache file: read the file, never fetch.
    /// - otherwise: fetch, then write the result to the cache file if one is
    ///   given.
    pub async fn get_or_fetch(
        &self,
        query_url: &str,
        cache_file: Option<&Path>,
        use_cache: bool,
    ) -> DomainResult<Value> {
        match cache_file {
            Some(path) if use_cache => {
                tracing::info!(path = %path.display(), "using cached dashboard data");
                load_cached(path).await
            }
            Some(path) => {
                tracing::info!(url = %query_url, "querying dashboard");
                let data = self.fetcher.fetch(query_url).await?;
                store_cached(path, &data).await?;
                tracing::debug!(path = %path.display(), "cached dashboard data");
                Ok(data)
            }
            None => {
                tracing::info!(url = %query_url, "querying dashboard");
                self.fetcher.fetch(query_url).await
            }
        }
    }
}

async fn load_cached(path: &Path) -> DomainResult<Value> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::CacheRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    serde_json::from_str(&content).map_err(|e| DomainError::CacheRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

async fn store_cached(path: &Path, data: &Value) -> DomainResult<()> {
    let write_err = |reason: String| DomainError::CacheWrite {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| write_err(e.to_string()))?;
    }
    let content = serde_json::to_string_pretty(data).map_err(|e| write_err(e.to_string()))?;
    fs::write(path, content)
        .await
        .map_err(|e| write_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StaticFetcher;
    use serde_json::json;
    use tempfile::TempDir;

    fn data() -> Value {
        json!({"keyname1": "value1", "keyname2": "value2"})
    }

    fn gate() -> CacheGate {
        CacheGate::new(Arc::new(
            StaticFetcher::new(data()).expecting_url("dummy-cdash-url"),
        ))
    }

    #[tokio::test]
    async fn test_fetch_writes_cache() {
        let dir = TempDir::new().unwrap();
        let cache_file = dir.path().join("cachedCDashQueryData.json");

        let fetched = gate()
            .get_or_fetch("dummy-cdash-url", Some(&cache_file), false)
            .await
            .unwrap();
        assert_eq!(fetched, data());

        let cached: Value =
            serde_json::from_str(&std::fs::read_to_string(&cache_file).unwrap()).unwrap();
        assert_eq!(cached, data());
    }

    #[tokio::test]
    async fn test_read_cache_skips_fetch() {
        let dir = TempDir::new().unwrap();
        let cache_file = dir.path().join("cachedCDashQueryData.json");
        std::fs::write(&cache_file, data().to_string()).unwrap();

        // The fetcher would reject this URL, so success proves the cache was used.
        let loaded = gate()
            .get_or_fetch("not-the-dummy-url", Some(&cache_file), true)
            .await
            .unwrap();
        assert_eq!(loaded, data());
    }

    #[tokio::test]
    async fn test_missing_cache_file_is_error() {
        let dir = TempDir::new().unwrap();
        let cache_file = dir.path().join("absent.json");
        let result = gate()
            .get_or_fetch("dummy-cdash-url", Some(&cache_file), true)
            .await;
        assert!(matches!(result, Err(DomainError::CacheRead { .. })));
    }

    #[tokio::test]
    async fn test_corrupt_cache_file_is_error() {
        let dir = TempDir::new().unwrap();
        let cache_file = dir.path().join("corrupt.json");
        std::fs::write(&cache_file, "{'python': 'literal'}").unwrap();
        let result = gate()
            .get_or_fetch("dummy-cdash-url", Some(&cache_file), true)
            .await;
        assert!(matches!(result, Err(DomainError::CacheRead { .. })));
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let cache_file = dir.path().join("nested").join("queries").join("index.json");
        gate()
            .get_or_fetch("dummy-cdash-url", Some(&cache_file), false)
            .await
            .unwrap();
        assert!(cache_file.exists());
    }

    #[tokio::test]
    async fn test_no_cache_file_fetches() {
        let fetched = gate().get_or_fetch("dummy-cdash-url", None, true).await.unwrap();
        assert_eq!(fetched, data());
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result = gate().get_or_fetch("wrong-url", None, false).await;
        assert!(matches!(result, Err(DomainError::Fetch { .. })));
    }
}
