//! Three-level build lookup: group → site → build name.
//!
//! The index borrows the summaries it was built from, so every leaf is the
//! very record held in the source list. It has no mutating methods once
//! built.

use std::collections::HashMap;

use crate::domain::models::{BuildSummary, ExpectedBuildKey};

type BuildsByName<'a> = HashMap<String, &'a BuildSummary>;
type BuildsBySite<'a> = HashMap<String, BuildsByName<'a>>;

/// Read-only lookup structure over a list of build summaries.
#[derive(Debug, Clone, Default)]
pub struct BuildIndex<'a> {
    groups: HashMap<String, BuildsBySite<'a>>,
    len: usize,
}

impl<'a> BuildIndex<'a> {
    /// Index `summaries` in a single pass.
    ///
    /// When two summaries share an identity tuple the later one replaces the
    /// earlier one.
    pub fn build(summaries: &'a [BuildSummary]) -> Self {
        let mut groups: HashMap<String, BuildsBySite<'a>> = HashMap::new();
        let mut len = 0;

        for summary in summaries {
            let replaced = groups
                .entry(summary.group.clone())
                .or_default()
                .entry(summary.site.clone())
                .or_default()
                .insert(summary.build_name.clone(), summary);

            if replaced.is_some() {
                tracing::debug!(
                    group = %summary.group,
                    site = %summary.site,
                    build = %summary.build_name,
                    "duplicate build identity, keeping the later record"
                );
            } else {
                len += 1;
            }
        }

        Self { groups, len }
    }

    /// Find the summary for `key`, or `None` if any level is missing.
    pub fn lookup(&self, key: &ExpectedBuildKey) -> Option<&'a BuildSummary> {
        self.get(&key.group, &key.site, &key.build_name)
    }

    pub fn get(&self, group: &str, site: &str, build_name: &str) -> Option<&'a BuildSummary> {
        self.groups
            .get(group)
            .and_then(|sites| sites.get(site))
            .and_then(|builds| builds.get(build_name))
            .copied()
    }

    /// Number of distinct identity tuples.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
