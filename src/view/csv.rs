//! CSV rendering of the triage result.

use std::io::{self, Write};

use crate::bug::Bug;

const HEADER: &str = "id,title,url,status,importance,package,date_last_updated";

/// Writes the bugs as CSV rows with a header line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render(bugs: &[Bug], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for bug in bugs {
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            bug.id,
            quote(&bug.title),
            quote(&bug.url),
            quote(&bug.status.to_string()),
            bug.importance,
            quote(&bug.package),
            bug.date_last_updated.to_rfc3339(),
        )?;
    }
    Ok(())
}

/// Quotes a field when it contains a comma, quote, or newline.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
