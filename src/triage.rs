//! The triage engine: per-package queries, merge, dedup, and ordering.

use std::collections::HashSet;
use std::error::Error;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;

use crate::bug::Bug;
use crate::plan::QueryPlan;
use crate::ports::tracker::BugTracker;
use crate::registry::Registry;

/// Triage over a single source package.
pub struct PackageTriage<'a> {
    tracker: &'a dyn BugTracker,
    plan: QueryPlan,
}

impl<'a> PackageTriage<'a> {
    /// Plans a single-package triage anchored at `now`.
    #[must_use]
    pub fn new(tracker: &'a dyn BugTracker, package: &str, days: u32, now: DateTime<Utc>) -> Self {
        Self { tracker, plan: QueryPlan::for_packages(vec![package.to_string()], days, now) }
    }

    /// Returns the package's recently updated bugs, deduplicated and ordered.
    ///
    /// # Errors
    ///
    /// Returns an error when the tracker query fails; no partial result is
    /// produced in that case.
    pub async fn updated_bugs(&self) -> Result<Vec<Bug>, Box<dyn Error + Send + Sync>> {
        collect_updated_bugs(self.tracker, &self.plan).await
    }
}

/// Triage over every package a registered team tracks.
pub struct TeamTriage<'a> {
    tracker: &'a dyn BugTracker,
    plan: QueryPlan,
}

impl<'a> TeamTriage<'a> {
    /// Plans a team triage anchored at `now`.
    ///
    /// `team` is resolved through the registry; a name that is not a
    /// registered team falls back to a single-package plan, so construction
    /// never fails.
    #[must_use]
    pub fn new(
        tracker: &'a dyn BugTracker,
        registry: &Registry,
        team: &str,
        days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self { tracker, plan: QueryPlan::resolve(registry, team, days, now) }
    }

    /// Returns the team's recently updated bugs, deduplicated and ordered.
    ///
    /// # Errors
    ///
    /// Returns an error when any per-package query fails; the successful
    /// packages' bugs are discarded rather than returned as if complete.
    pub async fn updated_bugs(&self) -> Result<Vec<Bug>, Box<dyn Error + Send + Sync>> {
        collect_updated_bugs(self.tracker, &self.plan).await
    }
}

/// Runs the planned queries and materializes the final sequence.
///
/// Per-package queries run concurrently and are joined before the merge, so
/// completion order never influences the result. The first failure cancels
/// the remaining queries and surfaces as the overall error. Merging keeps
/// one record per bug id (first seen in package order wins), drops anything
/// older than the cutoff, and sorts by last-update descending with ascending
/// id as the tie-break.
async fn collect_updated_bugs(
    tracker: &dyn BugTracker,
    plan: &QueryPlan,
) -> Result<Vec<Bug>, Box<dyn Error + Send + Sync>> {
    tracing::debug!(
        "querying {} package(s) for bugs updated since {}",
        plan.packages.len(),
        plan.cutoff
    );
    let queries = plan.packages.iter().map(|package| tracker.search(package, plan.cutoff));
    let per_package = try_join_all(queries).await?;

    let mut seen = HashSet::new();
    let mut bugs: Vec<Bug> = Vec::new();
    for bug in per_package.into_iter().flatten() {
        if bug.date_last_updated < plan.cutoff {
            continue;
        }
        if seen.insert(bug.id) {
            bugs.push(bug);
        }
    }
    bugs.sort_by(|a, b| {
        b.date_last_updated.cmp(&a.date_last_updated).then_with(|| a.id.cmp(&b.id))
    });
    Ok(bugs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bug::{Importance, Status};
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;

    /// In-memory tracker serving canned responses per package.
    struct FakeTracker {
        responses: HashMap<String, Vec<Bug>>,
        failing: HashSet<String>,
    }

    impl FakeTracker {
        fn new() -> Self {
            Self { responses: HashMap::new(), failing: HashSet::new() }
        }

        fn with_bugs(mut self, package: &str, bugs: Vec<Bug>) -> Self {
            self.responses.insert(package.to_string(), bugs);
            self
        }

        fn with_failure(mut self, package: &str) -> Self {
            self.failing.insert(package.to_string());
            self
        }
    }

    impl BugTracker for FakeTracker {
        fn search(
            &self,
            package: &str,
            since: DateTime<Utc>,
        ) -> crate::ports::tracker::SearchFuture<'_> {
            let package = package.to_string();
            Box::pin(async move {
                if self.failing.contains(&package) {
                    return Err(format!("connection reset while querying {package}").into());
                }
                Ok(self
                    .responses
                    .get(&package)
                    .map(|bugs| {
                        bugs.iter()
                            .filter(|b| b.date_last_updated >= since)
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default())
            })
        }
    }

    fn run_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn bug(id: u64, package: &str, updated: DateTime<Utc>) -> Bug {
        Bug {
            id,
            title: format!("bug {id}"),
            url: format!("https://bugs.launchpad.net/bugs/{id}"),
            status: Status::New,
            importance: Importance::Undecided,
            package: package.to_string(),
            date_last_updated: updated,
            duplicate_of: None,
        }
    }

    fn team_registry() -> Registry {
        Registry::from_yaml("ubuntu-openstack:\n  - nova\n  - neutron\n").unwrap()
    }

    #[tokio::test]
    async fn package_triage_excludes_bugs_older_than_cutoff() {
        let now = run_start();
        let tracker = FakeTracker::new().with_bugs(
            "cloud-init",
            vec![
                bug(5, "cloud-init", now - Duration::hours(2)),
                bug(3, "cloud-init", now - Duration::hours(5)),
                bug(7, "cloud-init", now - Duration::days(3)),
            ],
        );

        let triage = PackageTriage::new(&tracker, "cloud-init", 1, now);
        let bugs = triage.updated_bugs().await.unwrap();

        let ids: Vec<u64> = bugs.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[tokio::test]
    async fn package_triage_dedups_a_bug_returned_twice_by_one_query() {
        let now = run_start();
        let updated = now - Duration::hours(1);
        let tracker = FakeTracker::new()
            .with_bugs("qemu", vec![bug(12, "qemu", updated), bug(12, "qemu", updated)]);

        let triage = PackageTriage::new(&tracker, "qemu", 1, now);
        let bugs = triage.updated_bugs().await.unwrap();

        assert_eq!(bugs.len(), 1);
        assert_eq!(bugs[0].id, 12);
    }

    #[tokio::test]
    async fn team_triage_merges_shared_bug_exactly_once() {
        let now = run_start();
        let shared = bug(10, "nova", now - Duration::hours(3));
        let mut shared_via_neutron = shared.clone();
        shared_via_neutron.package = "neutron".to_string();
        let tracker = FakeTracker::new()
            .with_bugs("nova", vec![shared])
            .with_bugs(
                "neutron",
                vec![shared_via_neutron, bug(11, "neutron", now - Duration::hours(1))],
            );

        let triage = TeamTriage::new(&tracker, &team_registry(), "ubuntu-openstack", 2, now);
        let bugs = triage.updated_bugs().await.unwrap();

        let ids: Vec<u64> = bugs.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![11, 10]);
    }

    #[tokio::test]
    async fn ordering_is_update_descending_with_id_ascending_ties() {
        let now = run_start();
        let same_instant = now - Duration::hours(2);
        let tracker = FakeTracker::new().with_bugs(
            "lxd",
            vec![
                bug(30, "lxd", same_instant),
                bug(20, "lxd", same_instant),
                bug(40, "lxd", now - Duration::hours(1)),
            ],
        );

        let triage = PackageTriage::new(&tracker, "lxd", 1, now);
        let bugs = triage.updated_bugs().await.unwrap();

        let ids: Vec<u64> = bugs.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![40, 20, 30]);
    }

    #[tokio::test]
    async fn unknown_package_yields_empty_sequence_not_error() {
        let tracker = FakeTracker::new();
        let triage = PackageTriage::new(&tracker, "totally-fake-pkg", 1, run_start());
        let bugs = triage.updated_bugs().await.unwrap();
        assert!(bugs.is_empty());
    }

    #[tokio::test]
    async fn team_triage_surfaces_partial_transport_failure() {
        let now = run_start();
        let tracker = FakeTracker::new()
            .with_bugs("nova", vec![bug(10, "nova", now - Duration::hours(1))])
            .with_failure("neutron");

        let triage = TeamTriage::new(&tracker, &team_registry(), "ubuntu-openstack", 2, now);
        let result = triage.updated_bugs().await;

        let err = result.err().expect("partial failure must not produce a result");
        assert!(err.to_string().contains("neutron"));
    }

    #[tokio::test]
    async fn repeated_runs_against_fixed_snapshot_are_identical() {
        let now = run_start();
        let tracker = FakeTracker::new().with_bugs(
            "nova",
            vec![bug(2, "nova", now - Duration::hours(4)), bug(1, "nova", now - Duration::hours(2))],
        );

        let triage = PackageTriage::new(&tracker, "nova", 1, now);
        let first = triage.updated_bugs().await.unwrap();
        let second = triage.updated_bugs().await.unwrap();
        assert_eq!(first, second);
    }
}
