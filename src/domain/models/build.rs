//! Build summary domain model.
//!
//! A [`BuildSummary`] is the normalized per-build record every other
//! component reasons about. Each status section is independently optional:
//! `None` means the phase was not reported, which is different from a section
//! that reports zero errors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Update phase status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub error_count: i64,
}

/// Configure phase status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureStatus {
    pub error_count: i64,
}

/// Compilation phase status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationStatus {
    pub error_count: i64,
}

/// Test phase status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStatus {
    pub fail_count: i64,
    pub not_run_count: i64,
}

/// Normalized status of one build reported by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    /// Build group the record was reported under.
    pub group: String,
    /// Reporting machine.
    pub site: String,
    /// Build configuration name.
    pub build_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configure: Option<ConfigureStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilation: Option<CompilationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<TestStatus>,
}

impl BuildSummary {
    /// Create a summary with no status sections.
    pub fn new(
        group: impl Into<String>,
        site: impl Into<String>,
        build_name: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            site: site.into(),
            build_name: build_name.into(),
            update: None,
            configure: None,
            compilation: None,
            test: None,
        }
    }

    /// Create a summary where every section is present and clean.
    pub fn all_clean(
        group: impl Into<String>,
        site: impl Into<String>,
        build_name: impl Into<String>,
    ) -> Self {
        Self {
            update: Some(UpdateStatus::default()),
            configure: Some(ConfigureStatus::default()),
            compilation: Some(CompilationStatus::default()),
            test: Some(TestStatus::default()),
            ..Self::new(group, site, build_name)
        }
    }

    /// Identity tuple of this build.
    pub fn key(&self) -> ExpectedBuildKey {
        ExpectedBuildKey::new(&self.group, &self.site, &self.build_name)
    }

    /// Whether the dashboard reported any test results for this build.
    pub const fn has_test_results(&self) -> bool {
        self.test.is_some()
    }
}

/// Identity tuple of a build that a caller expects to exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedBuildKey {
    pub group: String,
    pub site: String,
    pub build_name: String,
}

impl ExpectedBuildKey {
    pub fn new(
        group: impl Into<String>,
        site: impl Into<String>,
        build_name: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            site: site.into(),
            build_name: build_name.into(),
        }
    }
}

impl fmt::Display for ExpectedBuildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.site, self.build_name)
    }
}

/// Why an expected build was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingStatus {
    #[serde(rename = "Build not found on CDash")]
    NotFound,
    #[serde(rename = "Build exists but no test results")]
    NoTestResults,
}

impl MissingStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "Build not found on CDash",
            Self::NoTestResults => "Build exists but no test results",
        }
    }
}

impl fmt::Display for MissingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expected build that is absent or has no test results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingBuildResult {
    pub group: String,
    pub site: String,
    pub build_name: String,
    pub status: MissingStatus,
}

impl MissingBuildResult {
    pub fn new(key: &ExpectedBuildKey, status: MissingStatus) -> Self {
        Self {
            group: key.group.clone(),
            site: key.site.clone(),
            build_name: key.build_name.clone(),
            status,
        }
    }
}

/// Aggregate pass/fail outcome with the message explaining a failure.
///
/// `message` is empty when `passed` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub message: String,
}

impl Verdict {
    pub const fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}
