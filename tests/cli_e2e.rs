#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn smartlife(data: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("smartlife"));
    cmd.env("SMARTLIFE_DATA", data.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_tasks(data: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(data.join("storage").join("mysmartlife_tasks.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_first_run_overview_shows_seeded_data() {
    let temp = TempDir::new().unwrap();

    smartlife(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Jimitry!"))
        .stdout(predicate::str::contains("English class"))
        .stdout(predicate::str::contains("Pay the internet bill"))
        .stdout(predicate::str::contains("Idea for a motivation app"));
}

#[test]
fn test_task_workflow() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    smartlife(data)
        .args(["task", "add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added"));

    let tasks = stored_tasks(data);
    let milk = tasks
        .iter()
        .find(|t| t["text"] == "Buy milk")
        .expect("task stored");
    assert_eq!(milk["completed"], false);
    let id = milk["id"].as_i64().unwrap().to_string();

    smartlife(data)
        .args(["task", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task done"));

    let tasks = stored_tasks(data);
    let milk = tasks.iter().find(|t| t["text"] == "Buy milk").unwrap();
    assert_eq!(milk["completed"], true);
    assert!(milk["updatedAt"].is_string());

    smartlife(data)
        .args(["task", "list", "--pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk").not());

    smartlife(data)
        .args(["task", "rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task deleted"));

    smartlife(data)
        .args(["task", "rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn test_empty_input_is_rejected() {
    let temp = TempDir::new().unwrap();

    smartlife(temp.path())
        .args(["task", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task text cannot be empty"));

    smartlife(temp.path())
        .args(["event", "add", "Dentist", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event time cannot be empty"));
}

#[test]
fn test_unknown_id_fails() {
    let temp = TempDir::new().unwrap();

    smartlife(temp.path())
        .args(["note", "edit", "42", "--title", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: 42"));
}

#[test]
fn test_event_and_note_commands() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    smartlife(data)
        .args(["event", "add", "Yoga", "18h", "--type", "sport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event added"));

    smartlife(data)
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18h Yoga"))
        .stdout(predicate::str::contains("[sport]"));

    smartlife(data)
        .args(["note", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stay motivated"));
}

#[test]
fn test_preferences() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    smartlife(data)
        .args(["prefs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user-name     = Jimitry"))
        .stdout(predicate::str::contains("theme         = light"));

    smartlife(data)
        .args(["prefs", "set", "--user-name", "Alex", "--theme", "dark"])
        .assert()
        .success();

    smartlife(data)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user-name     = Alex"))
        .stdout(predicate::str::contains("theme         = dark"))
        .stdout(predicate::str::contains("notifications = true"));
}

#[test]
fn test_clear_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    smartlife(data)
        .args(["task", "add", "Keep me"])
        .assert()
        .success();

    smartlife(data)
        .args(["clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
    assert!(stored_tasks(data).iter().any(|t| t["text"] == "Keep me"));

    smartlife(data)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));
    assert!(!data.join("storage").join("mysmartlife_tasks.json").exists());

    smartlife(data)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks."));
}

#[test]
fn test_config_roundtrip() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    smartlife(data)
        .args(["config", "seed-on-open", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-on-open = false"));

    smartlife(data)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks."));

    smartlife(data)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded default tasks"));

    smartlife(data)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to seed"));
}
