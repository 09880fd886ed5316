use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn minigit() -> Command {
    Command::cargo_bin("minigit").unwrap()
}

#[test]
fn no_subcommand_prints_help() {
    minigit()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with("minigit 0."))
        .stderr(predicate::str::contains("USAGE:"));
}

#[test]
fn version() {
    minigit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("minigit 0."))
        .stderr("");
}

#[test]
fn placeholder_outside_repo() {
    let temp_dir = tempfile::tempdir().unwrap();

    minigit()
        .current_dir(temp_dir.path())
        .arg("log")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn placeholder_inside_repo() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    minigit()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    minigit()
        .current_dir(&nested)
        .args(&["commit", "message"])
        .assert()
        .failure()
        .stderr("ERROR: 'commit' is not implemented yet\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();

    minigit()
        .current_dir(temp_dir.path())
        .env("MINIGIT_LOG", "debug")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized empty Git repository in "))
        .stderr(predicate::str::contains("initialized empty repository"));
}
