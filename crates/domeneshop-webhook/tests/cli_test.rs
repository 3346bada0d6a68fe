#![allow(deprecated)] // TODO: migrate cargo_bin → cargo_bin_cmd!

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn webhook() -> Command {
    let mut cmd = Command::cargo_bin("domeneshop-webhook").unwrap();
    cmd.env_remove("GROUP_NAME").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_group_name_fails() {
    webhook()
        .arg("name")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GROUP_NAME must be specified"));
}

#[test]
fn test_blank_group_name_fails() {
    webhook()
        .env("GROUP_NAME", "  ")
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GROUP_NAME must be specified"));
}

#[test]
fn test_name() {
    webhook()
        .env("GROUP_NAME", "acme.example.com")
        .arg("name")
        .assert()
        .success()
        .stdout("domeneshop\n");
}

#[test]
fn test_version() {
    webhook()
        .args(["--group-name", "acme.example.com", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("gitCommit"))
        .stderr(predicate::str::contains("Initializing domeneshop-webhook"));
}

#[test]
fn test_present_with_malformed_request() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    fs::write(&request, "{ not json").unwrap();

    webhook()
        .env("GROUP_NAME", "acme.example.com")
        .arg("present")
        .arg("--request")
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse challenge request"));
}

#[test]
fn test_cleanup_with_missing_request_file() {
    webhook()
        .env("GROUP_NAME", "acme.example.com")
        .args(["cleanup", "--request", "/nonexistent/request.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read challenge request"));
}

#[test]
fn test_solve_reads_stdin() {
    webhook()
        .env("GROUP_NAME", "acme.example.com")
        .args(["solve"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse challenge request"));
}
