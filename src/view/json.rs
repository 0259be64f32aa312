//! JSON rendering of the triage result.

use std::io::{self, Write};

use crate::bug::Bug;

/// Writes the bugs as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn render(bugs: &[Bug], out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, bugs)?;
    writeln!(out)
}
