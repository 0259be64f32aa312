//! Query planning: target resolution and the shared recency cutoff.

use chrono::{DateTime, Duration, Utc};

use crate::registry::Registry;

/// The set of packages to query and the single cutoff all queries share.
///
/// Resolved once at the start of a run. Using one absolute cutoff (rather
/// than re-evaluating "now" per query) keeps every query in an invocation
/// consistent even when execution takes noticeable wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// Packages to query, in sorted order for deterministic execution.
    pub packages: Vec<String>,
    /// Only bugs updated at or after this instant are of interest.
    pub cutoff: DateTime<Utc>,
}

impl QueryPlan {
    /// Resolves `target` against the registry and anchors the cutoff at `now`.
    ///
    /// A registered team name resolves to that team's full package set;
    /// any other string is treated as a literal package name. Resolution is
    /// total — an unknown string is simply a (possibly nonexistent) package,
    /// and the absence of matching bugs shows up later as an empty result.
    #[must_use]
    pub fn resolve(registry: &Registry, target: &str, days: u32, now: DateTime<Utc>) -> Self {
        match registry.packages_for(target) {
            Some(packages) => Self::for_packages(packages.to_vec(), days, now),
            None => Self::for_packages(vec![target.to_string()], days, now),
        }
    }

    /// Builds a plan for an explicit package set.
    #[must_use]
    pub fn for_packages(mut packages: Vec<String>, days: u32, now: DateTime<Utc>) -> Self {
        packages.sort();
        packages.dedup();
        Self { packages, cutoff: now - Duration::days(i64::from(days)) }
    }
}
