//! Common test utilities for integration tests
//!
//! Builders for CDash-shaped JSON payloads shared across test files.

#![allow(dead_code)]

use serde_json::{json, Value};

/// Raw build record as the index API reports it.
///
/// `test` is `(fail, notrun)`; `None` leaves the section out entirely.
pub fn raw_build(site: &str, build_name: &str, test: Option<(i64, i64)>) -> Value {
    let mut build = json!({
        "site": site,
        "buildname": build_name,
        "update": {"errors": 0},
        "configure": {"error": 0},
        "compilation": {"error": 0},
    });
    if let Some((fail, notrun)) = test {
        build["test"] = json!({"fail": fail, "notrun": notrun});
    }
    build
}

/// Index payload with the given `(group name, builds)` pairs.
pub fn index_payload(groups: Vec<(&str, Vec<Value>)>) -> Value {
    let groups: Vec<Value> = groups
        .into_iter()
        .map(|(name, builds)| json!({"name": name, "builds": builds}))
        .collect();
    json!({"buildgroups": groups})
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
