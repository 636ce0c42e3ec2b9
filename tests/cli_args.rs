//! Tests for CLI argument handling through the real binary.

mod common;

use common::temp_config;
use std::process::Command;

fn listtube_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_listtube"))
}

#[test]
fn test_help_lists_options() {
    let output = listtube_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--screen"));
    assert!(stdout.contains("--catalog"));
    assert!(stdout.contains("Number of rows to generate"));
}

#[test]
fn test_invalid_screen_is_rejected() {
    let output = listtube_cmd()
        .args(["--screen", "settings"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'settings'"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let output = listtube_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: loading config from"));
    assert!(stderr.contains("tick_rate_ms must be greater than zero"));
}

#[test]
fn test_too_many_rows_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = listtube_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--rows", "2000000"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("numbers.row_count must be at most 1000000"));
}
