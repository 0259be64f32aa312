//! Integration tests for top-level CLI behavior.
//!
//! These exercise argument handling only; nothing here talks to the
//! network.

use std::process::Command;

fn run_bug_triage(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_bug-triage");
    Command::new(bin).args(args).output().expect("failed to run bug-triage binary")
}

#[test]
fn help_shows_positionals_and_flags() {
    let output = run_bug_triage(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("PACKAGE_OR_TEAM"));
    assert!(stdout.contains("DAYS"));
    assert!(stdout.contains("--csv"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--open"));
    assert!(stdout.contains("--debug"));
}

#[test]
fn version_flag_prints_version() {
    let output = run_bug_triage(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("bug-triage"));
}

#[test]
fn non_numeric_days_exits_with_error() {
    let output = run_bug_triage(&["cloud-init", "soon"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("invalid value") || stderr.contains("soon"));
}

#[test]
fn csv_and_json_together_exit_with_error() {
    let output = run_bug_triage(&["cloud-init", "1", "--csv", "--json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn unknown_flag_exits_with_error() {
    let output = run_bug_triage(&["--nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unexpected argument"));
}
