//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("itemwage").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TOML config file"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_missing_config_is_fatal() {
    let mut cmd = Command::cargo_bin("itemwage").unwrap();
    cmd.arg("serve")
        .arg("--config")
        .arg("/nonexistent/itemwage.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_negative_constant_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[wage]\nincrement = -5").unwrap();

    let mut cmd = Command::cargo_bin("itemwage").unwrap();
    cmd.arg("serve").arg("--config").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}
