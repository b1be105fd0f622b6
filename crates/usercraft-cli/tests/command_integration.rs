//! Integration tests for CLI commands.
//!
//! Every test points `--project-dir` at a temporary directory so a
//! usercraft.toml in the working tree cannot leak in.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn usercraft(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("usercraft").unwrap();
    cmd.arg("--no-color")
        .arg("--project-dir")
        .arg(project.path())
        .env("HOME", project.path())
        .env("XDG_CONFIG_HOME", project.path().join("xdg"));
    cmd
}

// ============================================================================
// Basics
// ============================================================================

#[test]
fn version_command_succeeds() {
    Command::cargo_bin("usercraft")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("usercraft"));
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("usercraft")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn unknown_order_is_rejected() {
    Command::cargo_bin("usercraft")
        .unwrap()
        .args(["users", "--order", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Run
// ============================================================================

#[test]
fn run_prints_every_part() {
    let project = TempDir::new().unwrap();

    usercraft(&project)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Users age map:"))
        .stdout(predicate::str::contains(
            "I.1 The youngest user is Ann@ with age 15",
        ))
        .stdout(predicate::str::contains(
            "I.2 One of the oldest user is 1gor with age 24",
        ))
        .stdout(predicate::str::contains(
            "{{1gor, 24},{BruNo, 24},{Cloe, 18},}",
        ))
        .stdout(predicate::str::contains(
            "IV.3 The most popular user is {Name: Tom, Age: 30, Followers: 1300}",
        ))
        .stdout(predicate::str::contains("V.3 Users in custom container:"));
}

#[test]
fn run_uses_project_config() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("usercraft.toml"),
        r#"
[rules]
adult_age = 21

[[directory.seed]]
name = "Zoe"
age = 40

[[directory.seed]]
name = "Max"
age = 12
"#,
    )
    .unwrap();

    usercraft(&project)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I.1 The youngest user is Max with age 12",
        ))
        .stdout(predicate::str::contains(
            "I.3 Adult users only: \n{{Zoe, 40},}",
        ));
}

#[test]
fn invalid_config_fails_with_message() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("usercraft.toml"),
        "[followers]\nmultiplier = 0\n",
    )
    .unwrap();

    usercraft(&project)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiplier"));
}

// ============================================================================
// Users
// ============================================================================

#[test]
fn users_table_lists_final_users() {
    let project = TempDir::new().unwrap();

    usercraft(&project)
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("Followers"))
        .stdout(predicate::str::contains("Kate"))
        .stdout(predicate::str::contains("(7 users)"));
}

#[test]
fn users_json_descending() {
    let project = TempDir::new().unwrap();

    let output = usercraft(&project)
        .args(["users", "--format", "json", "--order", "desc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let users: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 7);
    assert_eq!(users[0]["name"], "Tom");
    assert_eq!(users[0]["followers_count"], 1300);
    assert_eq!(users[6]["name"], "Ann@");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_shows_defaults() {
    let project = TempDir::new().unwrap();

    usercraft(&project)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("adult_age = 18"))
        .stdout(predicate::str::contains("multiplier = 10"))
        .stdout(predicate::str::contains("BruNo"));
}

#[test]
fn config_reflects_local_override() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("usercraft.local.toml"),
        "[followers]\nbase = 50\n",
    )
    .unwrap();

    usercraft(&project)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("base = 50"));
}

#[test]
fn env_vars_override_defaults() {
    let project = TempDir::new().unwrap();

    usercraft(&project)
        .arg("config")
        .env("USERCRAFT_RULES__ADULT_AGE", "21")
        .env("USERCRAFT_FOLLOWERS__MULTIPLIER", "5")
        .assert()
        .success()
        .stdout(predicate::str::contains("adult_age = 21"))
        .stdout(predicate::str::contains("multiplier = 5"));
}

#[test]
fn env_adult_age_applies_to_run() {
    let project = TempDir::new().unwrap();

    usercraft(&project)
        .arg("run")
        .env("USERCRAFT_RULES__ADULT_AGE", "21")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I.3 Adult users only: \n1gor:24,BruNo:24,\n",
        ))
        .stdout(predicate::str::contains(
            "I.3 Adult users only: \n{{1gor, 24},{BruNo, 24},}",
        ))
        .stdout(predicate::str::contains("Cloe:18,").not());
}
