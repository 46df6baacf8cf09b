//! Integration tests for the `resolve` command.

#![cfg(unix)]

mod common;

use common::{stdout_lines, TestEnv};
use predicates::prelude::*;

#[test]
fn test_resolve_prints_paths_in_order() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["resolve", "b.txt", "a/x.txt", "./b.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![env.expected("b.txt"), env.expected("a/x.txt")]
    );
}

#[test]
fn test_resolve_absolute_element_ignores_base() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "/etc/../opt/tool"])
        .assert()
        .success()
        .stdout("/opt/tool\n");
}

#[test]
fn test_resolve_json() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["resolve", "--json", "--finalize", "one", "two"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, vec![env.expected("one"), env.expected("two")]);
}

#[test]
fn test_resolve_file_uri() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "file:///srv/data/../logs"])
        .assert()
        .success()
        .stdout("/srv/logs\n");
}

#[test]
fn test_resolve_unsupported_scheme_fails() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "ok", "https://example.com/x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("position 1"))
        .stderr(predicate::str::contains("https"));
}

#[test]
fn test_resolve_requires_elements() {
    let env = TestEnv::new();

    env.command().arg("resolve").assert().failure();
}

#[test]
fn test_base_dir_from_config_file() {
    let env = TestEnv::new();
    env.write_file("pathset.yaml", "base_dir: src\n");
    let nested = env.create_dir("src/deep");

    env.command_bare()
        .current_dir(&nested)
        .args(["resolve", "main.rs"])
        .assert()
        .success()
        .stdout(format!("{}\n", env.expected("src/main.rs")));
}

#[test]
fn test_invalid_config_file_exit_code() {
    let env = TestEnv::new();
    env.write_file("pathset.yaml", "not_a_field: true\n");

    env.command()
        .args(["resolve", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_env_base_dir() {
    let env = TestEnv::new();

    env.command_bare()
        .env("PATHSET_BASE_DIR", "/from/env")
        .args(["resolve", "x"])
        .assert()
        .success()
        .stdout("/from/env/x\n");
}

#[test]
fn test_verbose_reports_state() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "resolve", "--finalize", "a"])
        .assert()
        .success()
        .stderr(predicate::str::contains("final-strict"));
}
