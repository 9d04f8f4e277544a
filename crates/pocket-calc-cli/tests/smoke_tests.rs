//! Smoke tests for the pocket-calc CLI
//!
//! These tests run the real binary end to end.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the pocket-calc binary
fn pocket_calc() -> Command {
    let mut cmd = Command::cargo_bin("pocket-calc").expect("pocket-calc binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("POCKET_CALC_CONFIG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocket_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocket_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_args_fails() {
    pocket_calc().assert().failure();
}

// ============================================================================
// Press Tests
// ============================================================================

#[test]
fn test_press_addition() {
    pocket_calc()
        .args(["press", "7", "+", "3", "="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_press_chaining() {
    pocket_calc()
        .args(["press", "5", "+", "3", "-", "2", "="])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_press_division_by_zero() {
    pocket_calc()
        .args(["press", "8", "/", "0", "="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_press_trace() {
    pocket_calc()
        .args(["press", "--trace", "7", "*", "2", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("*"))
        .stdout(predicate::str::contains("14"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 4));
}

#[test]
fn test_press_tape() {
    pocket_calc()
        .args(["press", "--tape", "7", "+", "3", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 + 3 = 10"));
}

#[test]
fn test_press_json() {
    let output = pocket_calc()
        .args(["press", "--format", "json", "9", "-"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"], "9");
    assert_eq!(value["active_operator"], "subtract");
    assert_eq!(value["error"], false);
}

#[test]
fn test_press_unknown_token() {
    pocket_calc()
        .args(["press", "1", "sqrt", "2"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Unknown token"));
}

#[test]
fn test_press_requires_tokens() {
    pocket_calc().arg("press").assert().failure();
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    pocket_calc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("verbosity: normal"))
        .stdout(predicate::str::contains("precision: 12"));
}

#[test]
fn test_config_verbose_flag() {
    pocket_calc()
        .args(["-v", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("verbosity: verbose"));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.yaml");
    fs::write(&path, "error_text: Oops\nprecision: 4\n").unwrap();

    pocket_calc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("error_text: Oops"))
        .stdout(predicate::str::contains("precision: 4"));

    pocket_calc()
        .arg("--config")
        .arg(&path)
        .args(["press", "1", "/", "0", "="])
        .assert()
        .success()
        .stdout("Oops\n");
}

#[test]
fn test_config_file_missing() {
    pocket_calc()
        .args(["--config", "/nonexistent/calc.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_file_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.yaml");
    fs::write(&path, "precision: 99\n").unwrap();

    pocket_calc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("precision"));
}
