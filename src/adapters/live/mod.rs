//! Live adapters for real external interactions.

pub mod launchpad;

pub use launchpad::LaunchpadTracker;
