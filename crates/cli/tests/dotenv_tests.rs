//! Integration tests for `.env` handling in the binary.

mod common;

use common::{mlp_conf_cmd, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_dotenv_supplies_env_layer() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[train]\nepochs = 10\n");
    write_file(dir.path(), ".env", "MLP_TRAIN_EPOCHS=40\n");

    mlp_conf_cmd(dir.path())
        .env_remove("DOTENV_DISABLED")
        .env_remove("MLP_TRAIN_EPOCHS")
        .args(["get", "train.epochs", "--source"])
        .assert()
        .success()
        .stdout("40 (env)\n");
}

#[test]
fn test_dotenv_disabled_ignores_file() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[train]\nepochs = 10\n");
    write_file(dir.path(), ".env", "MLP_TRAIN_EPOCHS=40\n");

    mlp_conf_cmd(dir.path())
        .env_remove("MLP_TRAIN_EPOCHS")
        .args(["get", "train.epochs", "--source"])
        .assert()
        .success()
        .stdout("10 (default)\n");
}

#[test]
fn test_invalid_dotenv_fails_without_echoing_contents() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "project.cfg", "[train]\nepochs = 10\n");
    write_file(dir.path(), ".env", "MLP_SECRET=hunter2\nINVALID_LINE_WITHOUT_EQUALS\n");

    mlp_conf_cmd(dir.path())
        .env_remove("DOTENV_DISABLED")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load environment"))
        .stderr(predicate::str::contains("hunter2").not());
}
