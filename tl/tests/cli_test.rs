//! Tests for the tl binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a config that keeps the log file inside `temp`
fn write_config(temp: &TempDir, tasks: &str) -> std::path::PathBuf {
    let path = temp.path().join("tasklist.yml");
    let content = format!("log_dir: {}\n{}", temp.path().join("logs").display(), tasks);
    std::fs::write(&path, content).expect("Failed to write config");
    path
}

fn tl(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tl").expect("tl binary not built");
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_show_renders_list() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp, "");

    tl(&config)
        .args(["show", "Buy milk", "Clean room", "Go to gym", "--done", "1"])
        .assert()
        .success()
        .stdout("---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to gym\n");

    assert!(temp.path().join("logs").join("tasklist.log").exists());
}

#[test]
fn test_show_uses_seed_tasks() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp, "tasks:\n  - Buy milk\n  - { title: Clean room, done: true }\n");

    tl(&config)
        .args(["show", "Go to gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[X] Clean room\n[ ] Go to gym"));
}

#[test]
fn test_show_invalid_index_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp, "");

    tl(&config)
        .args(["show", "Buy milk", "--done", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid index: 4"));
}

#[test]
fn test_pending_and_completed() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp, "");

    tl(&config)
        .args(["pending", "Buy milk", "Clean room", "-d", "0"])
        .assert()
        .success()
        .stdout("[ ] Clean room\n");

    tl(&config)
        .args(["completed", "Buy milk", "Clean room"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks"));
}
