//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("persons").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("persons").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--unique-field"));
}

#[test]
fn test_schema_prints_sdl() {
    let mut cmd = Command::cargo_bin("persons").unwrap();
    cmd.arg("schema");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("type Query"))
        .stdout(predicate::str::contains("type Mutation"))
        .stdout(predicate::str::contains("canDrink: Boolean!"));
}

#[test]
fn test_config_reads_file_and_redacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[database]\npassword = \"hunter2\"\n\n[persons]\nunique_field = \"mail\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("persons").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("PERSONS_BIND")
        .arg("--config")
        .arg(&path)
        .arg("config");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("unique_field = \"mail\""))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_config_missing_file_fails() {
    let mut cmd = Command::cargo_bin("persons").unwrap();
    cmd.arg("--config").arg("/nonexistent/persons.toml").arg("config");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config not found"));
}
