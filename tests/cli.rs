//! End-to-end CLI tests
//!
//! Only commands that do not need a container runtime run here; the
//! lifecycle paths are covered by unit tests against a fake runner.

use assert_cmd::Command;
use predicates::prelude::*;

fn onc() -> Command {
    Command::cargo_bin("onc").expect("binary builds")
}

#[test]
fn test_help_lists_commands() {
    onc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("pb"))
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn test_unknown_command_fails() {
    onc().arg("frobnicate").assert().failure();
}

#[test]
fn test_new_scaffolds_project() {
    let tmp = tempfile::tempdir().unwrap();

    onc()
        .current_dir(tmp.path())
        .args(["new", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8090"));

    let root = tmp.path().join("demo");
    assert!(root.join("apps/pb/Dockerfile").exists());
    assert!(root.join("apps/pb/package.json").exists());
    assert!(root.join("apps/pb/fly.toml").exists());
    assert!(root.join("README.md").exists());
}

#[test]
fn test_new_refuses_existing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("demo")).unwrap();

    onc()
        .current_dir(tmp.path())
        .args(["new", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_pb_requires_subcommand() {
    // `pb` without a subcommand is a usage error, not a runtime error.
    onc().arg("pb").assert().failure();
}
