//! CDash HTTP client.
//!
//! Issues GET requests against the CDash JSON API and hands the decoded body
//! back as an untyped [`Value`]. Interpretation of the payload is left to the
//! extractor.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::DashboardFetcher;

const USER_AGENT: &str = concat!("cdash-verify/", env!("CARGO_PKG_VERSION"));

/// [`DashboardFetcher`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct CdashHttpFetcher {
    http: Client,
}

impl CdashHttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::HttpClient(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl DashboardFetcher for CdashHttpFetcher {
    async fn fetch(&self, query_url: &str) -> DomainResult<Value> {
        let fetch_err = |reason: String| DomainError::Fetch {
            url: query_url.to_string(),
            reason,
        };

        tracing::debug!(url = %query_url, "sending CDash request");
        let resp = self
            .http
            .get(query_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| fetch_err(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(fetch_err(format!("returned {status}: {body}")));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| fetch_err(format!("response is not valid JSON: {e}")))
    }
}
