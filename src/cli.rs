//! CLI argument definitions.

use clap::Parser;

/// Top-level CLI parser for `bug-triage`.
#[derive(Debug, Parser)]
#[command(name = "bug-triage", version, about = "Triage recently updated package bugs")]
pub struct Cli {
    /// Source package name (e.g. cloud-init, lxd) or packaging team name
    /// (e.g. ubuntu-openstack, foundations-bugs) to search for.
    #[arg(default_value = "ubuntu-server")]
    pub package_or_team: String,

    /// Days of updated bugs to triage.
    #[arg(default_value_t = 1)]
    pub days: u32,

    /// Output as CSV.
    #[arg(long, conflicts_with = "json")]
    pub csv: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Open resulting bugs in a web browser.
    #[arg(long)]
    pub open: bool,

    /// Additional logging output.
    #[arg(long)]
    pub debug: bool,
}
