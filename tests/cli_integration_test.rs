//! CLI integration tests for the cdash-verify binary.
//!
//! Every run replays a cached index file, so no dashboard is contacted.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::{index_payload, raw_build};
use serde_json::Value;
use tempfile::TempDir;

// ============================================================
// Helper functions
// ============================================================

/// Command for the built binary, run from `dir` with no inherited
/// `CDASH_VERIFY_*` settings.
fn cdash_verify_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cdash-verify"));
    cmd.current_dir(dir);
    for (key, _) in std::env::vars() {
        if key.starts_with("CDASH_VERIFY_") {
            cmd.env_remove(key);
        }
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `payload` where `--use-cache --cache-dir <dir>/cache` reads it.
fn seed_cache(dir: &Path, payload: &Value) {
    let cache = dir.join("cache");
    std::fs::create_dir_all(&cache).unwrap();
    std::fs::write(cache.join("fullCDashIndexBuilds.json"), payload.to_string()).unwrap();
}

fn run(dir: &Path, args: &[&str]) -> Output {
    cdash_verify_cmd(dir)
        .args(["--project", "Trilinos", "--cache-dir", "cache"])
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run cdash-verify {args:?}: {e}"))
}

fn clean_payload() -> Value {
    index_payload(vec![(
        "Nightly",
        vec![
            raw_build("host1", "gcc-debug", Some((0, 0))),
            raw_build("host1", "clang-opt", Some((0, 0))),
        ],
    )])
}

fn failing_payload() -> Value {
    index_payload(vec![(
        "Nightly",
        vec![
            raw_build("host1", "gcc-debug", Some((0, 0))),
            raw_build("host1", "clang-opt", Some((3, 0))),
        ],
    )])
}

// ============================================================
// check
// ============================================================

#[test]
fn check_passing_day_exits_zero() {
    let tmp = TempDir::new().unwrap();
    seed_cache(tmp.path(), &clean_payload());

    let out = run(
        tmp.path(),
        &["check", "-d", "2015-12-21", "--use-cache", "--expect", "gcc-debug,clang-opt"],
    );
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("PASS"));
}

#[test]
fn check_failing_build_exits_one() {
    let tmp = TempDir::new().unwrap();
    seed_cache(tmp.path(), &failing_payload());

    let out = run(tmp.path(), &["--json", "check", "-d", "2015-12-21", "--use-cache"]);
    assert_eq!(out.status.code(), Some(1));

    let body: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(body["passed"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("\"buildName\": \"clang-opt\""));
}

#[test]
fn check_unknown_expected_build_exits_one() {
    let tmp = TempDir::new().unwrap();
    seed_cache(tmp.path(), &clean_payload());

    let out = run(
        tmp.path(),
        &["check", "-d", "2015-12-21", "--use-cache", "--expect", "icc-debug"],
    );
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn check_without_cache_file_exits_two() {
    let tmp = TempDir::new().unwrap();

    let out = run(tmp.path(), &["--json", "check", "-d", "2015-12-21", "--use-cache"]);
    assert_eq!(out.status.code(), Some(2));

    let body: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

// ============================================================
// missing
// ============================================================

#[test]
fn missing_expected_build_exits_one_and_writes_report() {
    let tmp = TempDir::new().unwrap();
    seed_cache(tmp.path(), &clean_payload());
    std::fs::write(
        tmp.path().join("expected.csv"),
        "group, site, buildname\nNightly, host1, gcc-debug\nNightly, host2, icc-opt\n",
    )
    .unwrap();

    let out = run(
        tmp.path(),
        &[
            "--json",
            "missing",
            "-d",
            "2015-12-21",
            "--use-cache",
            "--expected-builds",
            "expected.csv",
            "--html",
            "reports/today.html",
        ],
    );
    assert_eq!(out.status.code(), Some(1));

    let body: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(body["missing"][0]["buildName"], "icc-opt");
    let report = std::fs::read_to_string(tmp.path().join("reports/today.html")).unwrap();
    assert!(report.contains("<h3>Builds Missing: bm=1</h3>"));
}

#[test]
fn missing_all_present_exits_zero() {
    let tmp = TempDir::new().unwrap();
    seed_cache(tmp.path(), &clean_payload());
    std::fs::write(
        tmp.path().join("expected.csv"),
        "group, site, buildname\nNightly, host1, gcc-debug\n",
    )
    .unwrap();

    let out = run(
        tmp.path(),
        &["missing", "-d", "2015-12-21", "--use-cache", "--expected-builds", "expected.csv"],
    );
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn missing_bad_csv_header_exits_two() {
    let tmp = TempDir::new().unwrap();
    seed_cache(tmp.path(), &clean_payload());
    std::fs::write(tmp.path().join("expected.csv"), "group, host, buildname\n").unwrap();

    let out = run(
        tmp.path(),
        &["missing", "-d", "2015-12-21", "--use-cache", "--expected-builds", "expected.csv"],
    );
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));
}

// ============================================================
// configuration and logging
// ============================================================

#[test]
fn missing_project_exits_two() {
    let tmp = TempDir::new().unwrap();

    let out = cdash_verify_cmd(tmp.path())
        .args(["urls", "-d", "2015-12-21"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn log_file_is_flushed_on_exit() {
    let tmp = TempDir::new().unwrap();
    seed_cache(tmp.path(), &failing_payload());
    let log_dir = tmp.path().join("logs");

    let out = cdash_verify_cmd(tmp.path())
        .env("CDASH_VERIFY_LOGGING__LEVEL", "debug")
        .env("CDASH_VERIFY_LOGGING__LOG_DIR", &log_dir)
        .args(["--project", "Trilinos", "--cache-dir", "cache"])
        .args(["check", "-d", "2015-12-21", "--use-cache"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let logged: u64 = std::fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().metadata().unwrap().len())
        .sum();
    assert!(logged > 0, "log directory holds only empty files");
}
