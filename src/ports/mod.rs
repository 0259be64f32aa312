//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the triage core and an external
//! system. Implementations live in `src/adapters/`.

pub mod tracker;

pub use tracker::{BugTracker, SearchFuture};
