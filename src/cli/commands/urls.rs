//! `urls`: print the query and browser URLs for a testing day.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::UrlsArgs;
use crate::domain::models::Config;
use crate::services::QueryUrls;

#[derive(Debug, Serialize)]
pub struct UrlsOutput {
    pub date: String,
    #[serde(flatten)]
    pub urls: QueryUrls,
}

impl CommandOutput for UrlsOutput {
    fn to_human(&self) -> String {
        [
            format!("Date:          {}", self.date),
            format!("Index query:   {}", self.urls.index_query),
            format!("Index page:    {}", self.urls.index_browser),
            format!("Tests query:   {}", self.urls.tests_query),
            format!("Tests page:    {}", self.urls.tests_browser),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &UrlsArgs, config: &Config, json_mode: bool) -> Result<bool> {
    let date = args.date.as_query_str();
    let out = UrlsOutput {
        urls: QueryUrls::new(
            &config.dashboard.url,
            &config.dashboard.project,
            &date,
            &config.dashboard.filter_fields,
        ),
        date,
    };
    output(&out, json_mode);
    Ok(true)
}
