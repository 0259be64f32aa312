//! Bug tracker port for read-only bug-task queries.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::bug::Bug;

/// Boxed future type alias used by [`BugTracker`] to keep the trait dyn-compatible.
pub type SearchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Bug>, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Read-only access to a remote bug tracker.
///
/// Abstracting the tracker allows the triage engine to be exercised with an
/// in-memory fake; the live adapter talks to the Launchpad web service.
pub trait BugTracker: Send + Sync {
    /// Returns bugs filed against `package` that changed at or after `since`.
    ///
    /// The same bug may legitimately appear more than once in one response
    /// (once per affected-package linkage); deduplication is the caller's
    /// concern. An empty response is a valid answer, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker cannot be reached or returns a
    /// malformed response.
    fn search(&self, package: &str, since: DateTime<Utc>) -> SearchFuture<'_>;
}
