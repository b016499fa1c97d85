//! Raw dashboard payload shape.
//!
//! Mirrors the parts of the CDash `api/v1/index.php` response this crate
//! reads. Unknown keys are ignored so upstream additions never break decoding.
//! Identity fields are optional here; the extractor decides what is mandatory.

use serde::{Deserialize, Serialize};

/// Top-level index query response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIndexPayload {
    #[serde(default, rename = "buildgroups", alias = "buildGroups")]
    pub build_groups: Vec<RawBuildGroup>,
}

/// A named partition of builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBuildGroup {
    pub name: String,
    #[serde(default)]
    pub builds: Vec<RawBuild>,
}

/// One reported build as the dashboard sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBuild {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default, rename = "buildname", alias = "buildName")]
    pub build_name: Option<String>,
    #[serde(default)]
    pub update: Option<RawErrorSection>,
    #[serde(default)]
    pub configure: Option<RawErrorSection>,
    #[serde(default)]
    pub compilation: Option<RawErrorSection>,
    #[serde(default)]
    pub test: Option<RawTestSection>,
}

/// Update, configure and compilation sections.
///
/// CDash names the counter `errors` under `update` and `error` elsewhere.
/// Both keys are kept apart so a section carrying both, or a `null` counter,
/// still decodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawErrorSection {
    #[serde(default)]
    pub error: Option<i64>,
    #[serde(default)]
    pub errors: Option<i64>,
}

impl RawErrorSection {
    pub const fn with_count(count: i64) -> Self {
        Self {
            error: Some(count),
            errors: None,
        }
    }

    /// `error` wins over `errors`; an absent or `null` counter is zero.
    pub fn count(&self) -> i64 {
        self.error.or(self.errors).unwrap_or(0)
    }
}

/// Test section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTestSection {
    #[serde(default)]
    pub fail: Option<i64>,
    #[serde(default)]
    pub notrun: Option<i64>,
}

impl RawTestSection {
    pub const fn with_counts(fail: i64, notrun: i64) -> Self {
        Self {
            fail: Some(fail),
            notrun: Some(notrun),
        }
    }

    pub fn fail_count(&self) -> i64 {
        self.fail.unwrap_or(0)
    }

    pub fn not_run_count(&self) -> i64 {
        self.notrun.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ignores_extra_keys() {
        let raw: RawBuild = serde_json::from_value(json!({
            "site": "site1",
            "buildname": "build1",
            "update": {"errors": 2, "files": 10},
            "configure": {"error": 0, "warning": 4},
            "extra-stuff": "stuff",
        }))
        .unwrap();
        assert_eq!(raw.site.as_deref(), Some("site1"));
        assert_eq!(raw.update.map(|s| s.count()), Some(2));
        assert_eq!(raw.configure.map(|s| s.count()), Some(0));
        assert!(raw.compilation.is_none());
        assert!(raw.test.is_none());
    }

    #[test]
    fn test_decode_accepts_camel_case_groups() {
        let payload: RawIndexPayload = serde_json::from_value(json!({
            "buildGroups": [{"name": "Nightly", "builds": []}]
        }))
        .unwrap();
        assert_eq!(payload.build_groups.len(), 1);
        assert_eq!(payload.build_groups[0].name, "Nightly");
    }

    #[test]
    fn test_test_section_counters_default_to_zero() {
        let section: RawTestSection = serde_json::from_value(json!({"pass": 1})).unwrap();
        assert_eq!(section, RawTestSection::default());
        assert_eq!(section.fail_count(), 0);
        assert_eq!(section.not_run_count(), 0);
    }

    #[test]
    fn test_section_with_both_counter_keys_decodes() {
        let section: RawErrorSection =
            serde_json::from_value(json!({"error": 1, "errors": 2})).unwrap();
        assert_eq!(section.count(), 1);

        let section: RawErrorSection = serde_json::from_value(json!({"errors": 3})).unwrap();
        assert_eq!(section.count(), 3);
    }

    #[test]
    fn test_null_counters_read_as_zero() {
        let section: RawErrorSection = serde_json::from_value(json!({"error": null})).unwrap();
        assert_eq!(section.count(), 0);

        let section: RawTestSection =
            serde_json::from_value(json!({"fail": null, "notrun": 4})).unwrap();
        assert_eq!(section.fail_count(), 0);
        assert_eq!(section.not_run_count(), 4);
    }
}
