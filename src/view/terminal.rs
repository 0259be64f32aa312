//! Terminal table rendering of the triage result.

use std::io::{self, Write};

use crate::bug::Bug;

const COLUMNS: [&str; 5] = ["ID", "Status", "Importance", "Package", "Title"];
const MAX_TITLE_WIDTH: usize = 60;

/// Writes the bugs as an aligned table with a trailing count line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render(bugs: &[Bug], out: &mut impl Write) -> io::Result<()> {
    let rows: Vec<[String; 5]> = bugs
        .iter()
        .map(|bug| {
            [
                bug.id.to_string(),
                bug.status.to_string(),
                bug.importance.to_string(),
                bug.package.clone(),
                truncate(&bug.title, MAX_TITLE_WIDTH),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (i, header) in COLUMNS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    write_row(out, &COLUMNS.map(String::from), &widths)?;
    write_separator(out, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    writeln!(out, "{} bug(s) to triage", bugs.len())
}

fn write_row(out: &mut impl Write, cells: &[String; 5], widths: &[usize; 5]) -> io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}", width = widths[i]));
    }
    writeln!(out, "{}", line.trim_end())
}

fn write_separator(out: &mut impl Write, widths: &[usize; 5]) -> io::Result<()> {
    let line: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", line.join("  "))
}

/// Truncates at `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
