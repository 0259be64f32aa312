//! Normalized bug record and the tracker's status/importance vocabulary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a bug task, spelled the way the tracker reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Newly reported, not yet looked at.
    New,
    /// Waiting on more information from the reporter.
    Incomplete,
    /// Valid report, but won't be acted on.
    Opinion,
    /// Not actually a bug.
    Invalid,
    /// Acknowledged but deliberately not fixed.
    #[serde(rename = "Won't Fix")]
    WontFix,
    /// Expired due to inactivity.
    Expired,
    /// Reproduced or confirmed by someone else.
    Confirmed,
    /// Triaged by a bug supervisor.
    Triaged,
    /// Actively being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fix committed but not yet in a release.
    #[serde(rename = "Fix Committed")]
    FixCommitted,
    /// Fix available in a released package.
    #[serde(rename = "Fix Released")]
    FixReleased,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::New => "New",
            Self::Incomplete => "Incomplete",
            Self::Opinion => "Opinion",
            Self::Invalid => "Invalid",
            Self::WontFix => "Won't Fix",
            Self::Expired => "Expired",
            Self::Confirmed => "Confirmed",
            Self::Triaged => "Triaged",
            Self::InProgress => "In Progress",
            Self::FixCommitted => "Fix Committed",
            Self::FixReleased => "Fix Released",
        };
        f.write_str(text)
    }
}

/// Importance assigned to a bug task by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    /// Importance not visible to the requesting user.
    Unknown,
    /// No importance assigned yet.
    Undecided,
    /// Drop everything.
    Critical,
    /// High importance.
    High,
    /// Medium importance.
    Medium,
    /// Low importance.
    Low,
    /// Nice to have.
    Wishlist,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unknown => "Unknown",
            Self::Undecided => "Undecided",
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Wishlist => "Wishlist",
        };
        f.write_str(text)
    }
}

/// One normalized bug report, immutable once constructed.
///
/// Within any sequence returned by the triage engine the `id` is unique,
/// even when the same bug is reachable through several queried packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    /// Tracker-assigned bug number.
    pub id: u64,
    /// Free-text summary.
    pub title: String,
    /// Canonical link to the bug, used for display and `--open`.
    pub url: String,
    /// Current workflow status of the task against `package`.
    pub status: Status,
    /// Importance of the task against `package`.
    pub importance: Importance,
    /// Source package the bug task is filed against.
    pub package: String,
    /// Last time anything about the bug changed.
    pub date_last_updated: DateTime<Utc>,
    /// Bug number this report duplicates, if marked as a duplicate.
    pub duplicate_of: Option<u64>,
}
