//! Integration tests for structured exit codes.
//!
//! These tests verify that mlp-conf returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{mlp_conf_cmd, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_success_returns_exit_code_0() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[s]\nk = v\n");

    mlp_conf_cmd(dir.path()).arg("list").assert().code(0);
}

#[test]
fn test_missing_base_file_lists_nothing() {
    let dir = TempDir::new().unwrap();

    mlp_conf_cmd(dir.path())
        .arg("list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No parameters found."));
}

#[test]
fn test_unreadable_base_file_returns_exit_code_1() {
    let dir = TempDir::new().unwrap();

    mlp_conf_cmd(dir.path())
        .args(["--config", ".", "list"])
        .assert()
        .code(1);
}

#[test]
fn test_bad_interpolation_returns_exit_code_1() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[s]\nk = ${missing:key}\n");

    mlp_conf_cmd(dir.path()).arg("list").assert().code(1);
}

#[test]
fn test_unknown_subcommand_returns_exit_code_2() {
    let dir = TempDir::new().unwrap();

    mlp_conf_cmd(dir.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn test_unknown_override_key_returns_exit_code_3() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[section]\nkey = value\n");
    write_file(
        dir.path(),
        "project.override.cfg",
        "[section]\nnonexistent = value\n",
    );

    mlp_conf_cmd(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn test_unknown_override_section_returns_exit_code_3() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[section]\nkey = value\n");
    write_file(dir.path(), "project.override.cfg", "[other]\nkey = value\n");

    mlp_conf_cmd(dir.path()).arg("list").assert().code(3);
}

#[test]
fn test_duplicate_key_returns_exit_code_3() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[section]\nkey = a\nkey = b\n");

    mlp_conf_cmd(dir.path()).arg("list").assert().code(3);
}
