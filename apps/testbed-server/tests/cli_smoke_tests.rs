//! CLI smoke tests for the testbed-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper to run the testbed-server binary with given arguments
fn run_testbed_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_testbed-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute testbed-server")
}

/// Write a minimal valid configuration into `dir` and return its path.
fn write_test_config(dir: &TempDir) -> String {
    let home_dir = dir.path().join("home");
    let config_path = dir.path().join("config.yaml");
    let yaml = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 0

logging:
  default:
    console_level: error
    file: ""
"#,
        home_dir.to_string_lossy().replace('\\', "/")
    );
    std::fs::write(&config_path, yaml).expect("Failed to write test config");
    config_path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help_command() {
    let output = run_testbed_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("testbed-server") || stdout.contains("Testbed"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_testbed_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.1.0"), "Should contain version number");
}

#[test]
fn test_cli_check_command() {
    let tmp = TempDir::new().expect("tempdir");
    let config_path = write_test_config(&tmp);

    let output = run_testbed_server(&["--config", &config_path, "check"]);

    assert!(
        output.status.success(),
        "Check should pass for a valid config; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration check passed"),
        "Should report a passing check"
    );
}

#[test]
fn test_cli_print_config() {
    let tmp = TempDir::new().expect("tempdir");
    let config_path = write_test_config(&tmp);

    let output = run_testbed_server(&["--config", &config_path, "--print-config"]);

    assert!(output.status.success(), "print-config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server:"), "Should print the server section");
    assert!(
        stdout.contains("host: 127.0.0.1"),
        "Should include configured host"
    );
}

#[test]
fn test_cli_rejects_malformed_config() {
    let tmp = TempDir::new().expect("tempdir");
    let config_path = tmp.path().join("broken.yaml");
    std::fs::write(&config_path, "server: [not, a, mapping]").expect("write config");

    let output = run_testbed_server(&["--config", &config_path.to_string_lossy(), "check"]);

    assert!(
        !output.status.success(),
        "Malformed config should fail the run"
    );
}
