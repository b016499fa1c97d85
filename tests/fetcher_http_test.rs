//! Integration tests for the CDash HTTP fetcher and cache gate
//!
//! Uses a mockito server in place of a CDash site.

mod common;

use std::sync::Arc;
use std::time::Duration;

use cdash_verify::services::{download_builds_and_summarize, query_and_determine_pass_fail};
use cdash_verify::{
    CacheGate, CdashHttpFetcher, DashboardFetcher, DashboardQuery, DomainError, QueryDate,
};
use common::{index_payload, raw_build};
use mockito::{Matcher, Server};
use tempfile::TempDir;

fn fetcher() -> CdashHttpFetcher {
    CdashHttpFetcher::new(Duration::from_secs(5)).expect("Failed to create client")
}

fn query(server_url: &str) -> DashboardQuery {
    DashboardQuery::new(
        server_url,
        "Trilinos",
        QueryDate::parse("2015-12-21").unwrap(),
        "filtercount=1",
    )
}

#[tokio::test]
async fn test_fetch_returns_json_body() {
    let mut server = Server::new_async().await;
    let body = index_payload(vec![("Nightly", vec![raw_build("host1", "gcc", Some((0, 0)))])]);
    let mock = server
        .mock("GET", "/api/v1/index.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("project".into(), "Trilinos".into()),
            Matcher::UrlEncoded("date".into(), "2015-12-21".into()),
            Matcher::UrlEncoded("filtercount".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let url = format!(
        "{}/api/v1/index.php?project=Trilinos&date=2015-12-21&filtercount=1",
        server.url()
    );
    let value = fetcher().fetch(&url).await.unwrap();

    assert_eq!(value, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_non_success_status_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/index.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let url = format!("{}/api/v1/index.php?project=Trilinos", server.url());
    match fetcher().fetch(&url).await {
        Err(DomainError::Fetch { url: failed, reason }) => {
            assert_eq!(failed, url);
            assert!(reason.contains("500"), "reason was: {reason}");
        }
        other => panic!("Expected Fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_invalid_json_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/index.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let url = format!("{}/api/v1/index.php?project=Trilinos", server.url());
    assert!(matches!(
        fetcher().fetch(&url).await,
        Err(DomainError::Fetch { .. })
    ));
}

#[tokio::test]
async fn test_download_then_replay_from_cache() {
    common::setup_test_logging();
    let mut server = Server::new_async().await;
    let body = index_payload(vec![
        ("Nightly", vec![raw_build("host1", "gcc-debug", Some((0, 0)))]),
        ("Experimental", vec![raw_build("host2", "clang-opt", None)]),
    ]);
    // Only the first call may reach the server.
    let mock = server
        .mock("GET", "/api/v1/index.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let cache = TempDir::new().unwrap();
    let gate = CacheGate::new(Arc::new(fetcher()));

    let fetched = download_builds_and_summarize(
        &gate,
        &query(&server.url()).with_cache(cache.path(), false),
    )
    .await
    .unwrap();
    assert_eq!(fetched.len(), 2);
    assert!(cache.path().join("fullCDashIndexBuilds.json").exists());

    let replayed = download_builds_and_summarize(
        &gate,
        &query(&server.url()).with_cache(cache.path(), true),
    )
    .await
    .unwrap();
    assert_eq!(replayed, fetched);
    assert_eq!(replayed[1].group, "Experimental");
    assert!(replayed[1].test.is_none());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_pass_fail_against_server() {
    let mut server = Server::new_async().await;
    let body = index_payload(vec![(
        "Nightly",
        vec![
            raw_build("host1", "gcc-debug", Some((0, 0))),
            raw_build("host1", "gcc-opt", Some((1, 0))),
        ],
    )]);
    let _mock = server
        .mock("GET", "/api/v1/index.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let gate = CacheGate::new(Arc::new(fetcher()));
    let verdict = query_and_determine_pass_fail(&gate, &query(&server.url()), &["gcc-debug"])
        .await
        .unwrap();

    assert!(!verdict.passed);
    assert!(verdict.message.starts_with("Error, the build {"));
    assert!(verdict.message.contains("\"buildName\": \"gcc-opt\""));
    assert!(verdict.message.ends_with("} failed!"));
}
