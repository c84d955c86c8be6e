//! Runs the built binary for the paths that never reach the network.

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clockify-month-fill"))
}

#[test]
fn missing_api_key_prints_usage_and_fails() {
    let output = binary().output().expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: clockify-month-fill <api_key>"));
    assert!(stdout.contains("Creates time entries for the current month."));
}

#[test]
fn blank_api_key_prints_usage_and_fails() {
    let output = binary().arg(" ").output().expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage:"));
}

#[test]
fn help_lists_the_modes() {
    let output = binary().arg("--help").output().expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("Lists available workspaces."));
}
