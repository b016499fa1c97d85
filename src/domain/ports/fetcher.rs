//! Dashboard fetcher port.
//!
//! The core never talks HTTP itself. It receives an already-resolved JSON
//! payload from whatever implements this trait: the reqwest adapter in
//! production, canned data in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;

/// Source of raw dashboard query responses.
#[async_trait]
pub trait DashboardFetcher: Send + Sync {
    /// Fetch the JSON document behind `query_url`.
    ///
    /// Transport failures propagate unchanged; callers do not retry.
    async fn fetch(&self, query_url: &str) -> DomainResult<Value>;
}

/// Fetcher that always returns the same payload.
///
/// Optionally asserts the requested URL, which lets tests check that callers
/// built the query they meant to.
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    payload: Value,
    expected_url: Option<String>,
}

impl StaticFetcher {
    pub const fn new(payload: Value) -> Self {
        Self {
            payload,
            expected_url: None,
        }
    }

    #[must_use]
    pub fn expecting_url(mut self, url: impl Into<String>) -> Self {
        self.expected_url = Some(url.into());
        self
    }
}

#[async_trait]
impl DashboardFetcher for StaticFetcher {
    async fn fetch(&self, query_url: &str) -> DomainResult<Value> {
        if let Some(expected) = &self.expected_url {
            if expected != query_url {
                return Err(crate::domain::errors::DomainError::Fetch {
                    url: query_url.to_string(),
                    reason: format!("unexpected query url, expected '{expected}'"),
                });
            }
        }
        Ok(self.payload.clone())
    }
}
