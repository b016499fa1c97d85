//! Expected-build matching.
//!
//! Two checks with different strength:
//! - [`find_missing`] matches the full identity tuple and also reports builds
//!   that exist without test results.
//! - [`all_expected_exist`] is a coarse gate on build names only.
//!
//! Neither judges whether a build passed.

use crate::domain::models::{ExpectedBuildKey, MissingBuildResult, MissingStatus, Verdict};
use crate::services::build_index::BuildIndex;

/// Report expected builds that are absent or have no `test` section, in the
/// order of `expected`.
pub fn find_missing(index: &BuildIndex<'_>, expected: &[ExpectedBuildKey]) -> Vec<MissingBuildResult> {
    let missing: Vec<MissingBuildResult> = expected
        .iter()
        .filter_map(|key| match index.lookup(key) {
            None => Some(MissingBuildResult::new(key, MissingStatus::NotFound)),
            Some(summary) if !summary.has_test_results() => {
                Some(MissingBuildResult::new(key, MissingStatus::NoTestResults))
            }
            Some(_) => None,
        })
        .collect();

    tracing::debug!(
        expected = expected.len(),
        missing = missing.len(),
        "matched expected builds"
    );
    missing
}

/// Render names the way the failure message lists them: `['a', 'b']`.
pub fn format_name_list<S: AsRef<str>>(names: &[S]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| format!("'{}'", name.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Check that every expected build name appears among the actual names.
///
/// Stops at the first expected name that is absent. Extra actual builds are
/// fine.
pub fn all_expected_exist<A, E>(actual: &[A], expected: &[E]) -> Verdict
where
    A: AsRef<str>,
    E: AsRef<str>,
{
    for name in expected {
        let name = name.as_ref();
        if !actual.iter().any(|a| a.as_ref() == name) {
            return Verdict::fail(format!(
                "Error, the expected build '{name}' does not exist in the list of builds {}",
                format_name_list(actual)
            ));
        }
    }
    Verdict::pass()
}
