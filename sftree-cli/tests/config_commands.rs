//! Integration tests for `validate`, `--config` and exit codes.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_validate_valid_file() {
    let env = TestEnv::new();
    let file = env.create_file(
        "conf.yaml",
        "limits:\n  max_name_len: 64\nmirror:\n  directory_mode: 448\n",
    );
    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout("Configuration is valid\n");
}

#[test]
fn test_validate_rejects_zero_limit() {
    let env = TestEnv::new();
    let file = env.create_file("conf.yaml", "limits:\n  max_name_len: 0\n");
    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("limits.max_name_len"));
}

#[test]
fn test_validate_rejects_unknown_field() {
    let env = TestEnv::new();
    let file = env.create_file("conf.yaml", "mirrors:\n  include_hidden: true\n");
    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();
    env.command()
        .args(["validate", "missing.yaml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_config_flag_is_applied() {
    let env = TestEnv::new();
    let file = env.create_file("limits.yaml", "limits:\n  max_name_len: 3\n");
    env.command()
        .arg("--config")
        .arg(&file)
        .args(["split", "abcd"])
        .assert()
        .code(3);
}

#[test]
fn test_config_env_var_is_applied() {
    let env = TestEnv::new();
    let file = env.create_file("limits.yaml", "limits:\n  max_name_len: 3\n");
    env.command()
        .env("SFTREE_CONFIG", &file)
        .args(["split", "abcd"])
        .assert()
        .code(3);
}

#[test]
fn test_missing_config_flag_file() {
    let env = TestEnv::new();
    env.command()
        .args(["--config", "missing.yaml", "split", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_project_config() {
    let env = TestEnv::new();
    env.create_file("sftree.yaml", "limits:\n  max_path_len: 9999\n");
    env.command().args(["split", "a"]).assert().code(7);
}

#[test]
fn test_invalid_env_override() {
    let env = TestEnv::new();
    env.command()
        .env("SFTREE_MAX_DEPTH", "deep")
        .args(["split", "a"])
        .assert()
        .code(7);
}

#[test]
fn test_unknown_command_fails() {
    let env = TestEnv::new();
    env.command().arg("frobnicate").assert().code(2);
}
