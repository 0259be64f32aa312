//! Live adapter for the `BugTracker` port using the Launchpad web service.
//!
//! Issues anonymous read-only requests against the Launchpad API: one
//! `searchTasks` call per package (following collection pages), then one
//! fetch per referenced bug to pick up the fields the task entry lacks.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::bug::{Bug, Importance, Status};
use crate::ports::tracker::{BugTracker, SearchFuture};

const LAUNCHPAD_API_ROOT: &str = "https://api.launchpad.net/devel";

/// Live tracker adapter backed by the Launchpad web service.
pub struct LaunchpadTracker {
    client: Client,
    api_root: String,
    distribution: String,
}

impl LaunchpadTracker {
    /// Creates a tracker for the Ubuntu distribution on the public API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(LAUNCHPAD_API_ROOT, "ubuntu")
    }

    /// Creates a tracker against an explicit API root and distribution.
    #[must_use]
    pub fn with_root(api_root: &str, distribution: &str) -> Self {
        Self {
            client: Client::new(),
            api_root: api_root.trim_end_matches('/').to_string(),
            distribution: distribution.to_string(),
        }
    }

    async fn fetch_page(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<TaskPage, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(url).query(query).send().await.map_err(
            |e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("Launchpad request failed: {e}").into()
            },
        )?;

        let status = response.status();
        let body =
            response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("Failed to read Launchpad response: {e}").into()
            })?;

        if !status.is_success() {
            return Err(format!("Launchpad API error ({}): {body}", status.as_u16()).into());
        }

        serde_json::from_str(&body).map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("Failed to parse Launchpad task page: {e}").into()
        })
    }

    async fn fetch_bug(
        &self,
        bug_link: &str,
    ) -> Result<BugEntry, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(bug_link).send().await.map_err(
            |e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("Launchpad bug fetch failed: {e}").into()
            },
        )?;

        let status = response.status();
        let body =
            response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("Failed to read Launchpad bug response: {e}").into()
            })?;

        if !status.is_success() {
            return Err(format!("Launchpad API error ({}): {body}", status.as_u16()).into());
        }

        serde_json::from_str(&body).map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("Failed to parse Launchpad bug entry: {e}").into()
        })
    }
}

impl Default for LaunchpadTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// One page of a `searchTasks` collection.
#[derive(Deserialize)]
struct TaskPage {
    entries: Vec<TaskEntry>,
    next_collection_link: Option<String>,
}

/// A bug task as returned by `searchTasks`.
#[derive(Deserialize)]
struct TaskEntry {
    bug_link: String,
    status: Status,
    importance: Importance,
}

/// The bug resource a task entry points at.
#[derive(Deserialize)]
struct BugEntry {
    id: u64,
    title: String,
    web_link: String,
    date_last_updated: DateTime<Utc>,
    duplicate_of_link: Option<String>,
}

/// Extracts the trailing bug number from a Launchpad resource link.
fn bug_number_from_link(link: &str) -> Option<u64> {
    link.rsplit('/').next()?.parse().ok()
}

impl BugTracker for LaunchpadTracker {
    fn search(&self, package: &str, since: DateTime<Utc>) -> SearchFuture<'_> {
        let package = package.to_string();

        Box::pin(async move {
            let search_url = format!(
                "{}/{}/+source/{}",
                self.api_root, self.distribution, package
            );
            let modified_since = since.to_rfc3339();

            let mut tasks = Vec::new();
            let mut page = self
                .fetch_page(
                    &search_url,
                    &[("ws.op", "searchTasks"), ("modified_since", &modified_since)],
                )
                .await?;
            loop {
                tasks.append(&mut page.entries);
                match page.next_collection_link {
                    Some(next) => page = self.fetch_page(&next, &[]).await?,
                    None => break,
                }
            }
            tracing::debug!("{package}: {} task(s) since {modified_since}", tasks.len());

            let mut bugs = Vec::with_capacity(tasks.len());
            let mut cache: HashMap<String, BugEntry> = HashMap::new();
            for task in tasks {
                // A bug already fetched for an earlier task in this page set
                // is reused rather than re-requested.
                let entry = match cache.entry(task.bug_link.clone()) {
                    Entry::Occupied(occupied) => occupied.into_mut(),
                    Entry::Vacant(vacant) => {
                        let fetched = self.fetch_bug(&task.bug_link).await?;
                        vacant.insert(fetched)
                    }
                };
                bugs.push(Bug {
                    id: entry.id,
                    title: entry.title.clone(),
                    url: entry.web_link.clone(),
                    status: task.status,
                    importance: task.importance,
                    package: package.clone(),
                    date_last_updated: entry.date_last_updated,
                    duplicate_of: entry
                        .duplicate_of_link
                        .as_deref()
                        .and_then(bug_number_from_link),
                });
            }
            Ok(bugs)
        })
    }
}
