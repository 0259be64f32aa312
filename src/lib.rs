//! Core library entry for the `bug-triage` CLI.

pub mod adapters;
pub mod browser;
pub mod bug;
pub mod cli;
pub mod logging;
pub mod plan;
pub mod ports;
pub mod registry;
pub mod triage;
pub mod view;

use std::io;

use chrono::Utc;
use clap::error::ErrorKind;
use clap::Parser;

use crate::adapters::live::LaunchpadTracker;
use crate::registry::Registry;
use crate::triage::{PackageTriage, TeamTriage};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the registry is
/// malformed, any tracker query fails, or output cannot be written.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.debug);

    let registry = Registry::builtin()?;
    let tracker = LaunchpadTracker::new();
    let now = Utc::now();

    let bugs = if registry.contains_team(&cli.package_or_team) {
        TeamTriage::new(&tracker, &registry, &cli.package_or_team, cli.days, now)
            .updated_bugs()
            .await
    } else {
        PackageTriage::new(&tracker, &cli.package_or_team, cli.days, now).updated_bugs().await
    }
    .map_err(|e| format!("Triage failed: {e}"))?;

    let mut stdout = io::stdout().lock();
    let rendered = if cli.csv {
        view::csv::render(&bugs, &mut stdout)
    } else if cli.json {
        view::json::render(&bugs, &mut stdout)
    } else {
        view::terminal::render(&bugs, &mut stdout)
    };
    rendered.map_err(|e| format!("Failed to write output: {e}"))?;

    if cli.open {
        browser::open_all(&bugs);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[tokio::test]
    async fn run_errors_on_unknown_flag() {
        let result = run(["bug-triage", "--nope"]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_errors_on_non_numeric_days() {
        let result = run(["bug-triage", "cloud-init", "soon"]).await;
        assert!(result.is_err());
    }
}
