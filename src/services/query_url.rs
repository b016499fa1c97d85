//! CDash query and browser URL construction.
//!
//! All functions concatenate verbatim. `filter_fields` is appended unescaped,
//! and the date is not validated here (see
//! [`QueryDate`](crate::domain::models::QueryDate)).

use serde::Serialize;

fn query_url(cdash_url: &str, page: &str, project: &str, date: &str, filter_fields: &str) -> String {
    format!("{cdash_url}/{page}?project={project}&date={date}&{filter_fields}")
}

/// Machine-readable build index (`api/v1/index.php`).
pub fn index_query_url(cdash_url: &str, project: &str, date: &str, filter_fields: &str) -> String {
    query_url(cdash_url, "api/v1/index.php", project, date, filter_fields)
}

/// Human-browsable build index page (`index.php`).
pub fn index_browser_url(cdash_url: &str, project: &str, date: &str, filter_fields: &str) -> String {
    query_url(cdash_url, "index.php", project, date, filter_fields)
}

/// Machine-readable test query (`api/v1/queryTests.php`).
pub fn query_tests_query_url(
    cdash_url: &str,
    project: &str,
    date: &str,
    filter_fields: &str,
) -> String {
    query_url(cdash_url, "api/v1/queryTests.php", project, date, filter_fields)
}

/// Human-browsable test query page (`queryTests.php`).
pub fn query_tests_browser_url(
    cdash_url: &str,
    project: &str,
    date: &str,
    filter_fields: &str,
) -> String {
    query_url(cdash_url, "queryTests.php", project, date, filter_fields)
}

/// All four URLs for one (project, date, filters) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryUrls {
    pub index_query: String,
    pub index_browser: String,
    pub tests_query: String,
    pub tests_browser: String,
}

impl QueryUrls {
    pub fn new(cdash_url: &str, project: &str, date: &str, filter_fields: &str) -> Self {
        Self {
            index_query: index_query_url(cdash_url, project, date, filter_fields),
            index_browser: index_browser_url(cdash_url, project, date, filter_fields),
            tests_query: query_tests_query_url(cdash_url, project, date, filter_fields),
            tests_browser: query_tests_browser_url(cdash_url, project, date, filter_fields),
        }
    }
}
