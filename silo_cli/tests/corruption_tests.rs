//! Corrupted-store behavior for the silo CLI.
//!
//! A corrupted registry snapshot is an infrastructure failure: every command
//! must refuse to run rather than silently start over with an empty
//! inventory, and the broken file must be left untouched for inspection.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("silo"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_registry_fails_loudly() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("registry.json"), "{ invalid json }}}}")
        .expect("Failed to write corrupted registry");

    cli()
        .arg("list")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupted"));
}

#[test]
fn test_corrupted_registry_blocks_mutation() {
    let temp_dir = setup_test_dir();
    let registry_path = temp_dir.path().join("registry.json");
    fs::write(&registry_path, "not even json").unwrap();

    cli()
        .args(["add", "1", "Apple", "5"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupted"));

    // The broken file is left as-is, not overwritten
    let contents = fs::read_to_string(&registry_path).unwrap();
    assert_eq!(contents, "not even json");
}

#[test]
fn test_truncated_registry_is_corrupted() {
    let temp_dir = setup_test_dir();
    // Simulates a partial write from a crashed non-atomic writer
    fs::write(
        temp_dir.path().join("registry.json"),
        r#"{"warehouses":[{"id":1,"na"#,
    )
    .unwrap();

    cli()
        .arg("list")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupted"));
}

#[test]
fn test_missing_registry_is_fresh_install() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("list")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No warehouses."));
}

#[test]
fn test_registry_survives_across_invocations() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["create", "Test", "100"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();
    cli()
        .args(["add", "1", "Apple", "10"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    // A fresh process sees the same state
    cli()
        .args(["show", "1"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("balance = 10"));
}
