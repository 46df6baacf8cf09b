//! Integration tests for the `snapshot` command.

#![cfg(unix)]

mod common;

use common::{stdout_lines, TestEnv};
use predicates::prelude::*;

#[test]
fn test_snapshot_to_stdout() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["snapshot", "a", "b", "a"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["paths"],
        serde_json::json!([env.expected("a"), env.expected("b")])
    );
}

#[test]
fn test_snapshot_round_trip_through_file() {
    let env = TestEnv::new();
    let file = env.path().join("snap.json");

    env.command()
        .args(["snapshot", "src/lib.rs", "src/main.rs", "--output"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 path(s)"));
    assert!(file.exists());

    let output = env
        .command_bare()
        .args(["snapshot", "--restore"])
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![env.expected("src/lib.rs"), env.expected("src/main.rs")]
    );
}

#[test]
fn test_quiet_snapshot_writes_silently() {
    let env = TestEnv::new();
    let file = env.path().join("snap.json");

    env.command()
        .args(["--quiet", "snapshot", "x", "--output"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_restore_missing_file_is_io_error() {
    let env = TestEnv::new();

    env.command()
        .args(["snapshot", "--restore", "missing.json"])
        .assert()
        .code(5);
}

#[test]
fn test_restore_garbage_fails() {
    let env = TestEnv::new();
    let file = env.write_file("bad.json", "{\"paths\": 7}");

    env.command()
        .args(["snapshot", "--restore"])
        .arg(&file)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("serialization error"));
}

#[test]
fn test_restore_conflicts_with_elements() {
    let env = TestEnv::new();

    env.command()
        .args(["snapshot", "a", "--restore", "snap.json"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_restore_keeps_entries_verbatim() {
    let env = TestEnv::new();
    let file = env.write_file("rel.json", "{\"paths\": [\"relative/entry\"]}");

    env.command()
        .args(["snapshot", "--restore"])
        .arg(&file)
        .assert()
        .success()
        .stdout("relative/entry\n");
}
