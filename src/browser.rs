//! Browser launch for the `--open` flag.

use crate::bug::Bug;

/// Opens each bug's URL in the default browser, in sequence order.
///
/// A URL that fails to open is logged and skipped; one stubborn browser
/// should not abort a run whose triage output already printed.
pub fn open_all(bugs: &[Bug]) {
    for bug in bugs {
        if let Err(e) = webbrowser::open(&bug.url) {
            tracing::warn!("Failed to open {}: {e}", bug.url);
        }
    }
}
