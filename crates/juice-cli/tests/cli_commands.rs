//! Integration tests for the `juice` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn juice() -> Command {
    Command::cargo_bin("juice").unwrap()
}

fn seeded(args: &[&str]) -> Command {
    let mut cmd = juice();
    cmd.args(["--seed", "7"]).args(args);
    cmd
}

// -- Oracle --

#[test]
fn fate_check_answers() {
    seeded(&["fate", "likely"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fate Check").and(predicate::str::contains("intensity")));
}

#[test]
fn fate_check_unknown_likelihood_falls_back_to_even_odds() {
    let output = seeded(&["--json", "fate", "certain"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metadata"]["likelihood"], "EvenOdds");
}

#[test]
fn fate_check_sides_conflict() {
    seeded(&["fate", "--left", "--right"]).assert().failure();
}

#[test]
fn same_seed_same_output() {
    let first = seeded(&["--json", "event"]).output().unwrap();
    let second = seeded(&["--json", "event"]).output().unwrap();
    let strip = |bytes: &[u8]| {
        String::from_utf8_lossy(bytes)
            .lines()
            .filter(|l| !l.contains("timestamp"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip(&first.stdout), strip(&second.stdout));
}

#[test]
fn roll_expression() {
    seeded(&["roll", "2d6+1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dice").and(predicate::str::contains("2d6+1")));
}

#[test]
fn roll_with_advantage_reports_dropped_pool() {
    seeded(&["roll", "1d20", "--advantage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with advantage, dropped"));
}

#[test]
fn roll_rejects_bad_expression() {
    seeded(&["roll", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice expression"));
}

#[test]
fn roll_rejects_oversized_die() {
    seeded(&["roll", "100d4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("die too large"));
}

#[test]
fn skew_accepts_negative() {
    seeded(&["skew", "-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skew -2"));
}

#[test]
fn json_output_is_a_record() {
    let output = seeded(&["--json", "fate", "even"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "fate_check");
    assert_eq!(value["label"], "Fate Check");
    assert!(value["metadata"].is_object());
}

#[test]
fn oracle_tables_roll() {
    for (cmd, label) in [
        ("scene", "Next Scene"),
        ("event", "Random Event"),
        ("color", "Color"),
        ("property", "Property"),
        ("detail", "Detail"),
        ("challenge", "Challenge"),
        ("price", "Pay the Price"),
    ] {
        seeded(&[cmd])
            .assert()
            .success()
            .stdout(predicate::str::contains(label));
    }
}

// -- Generators --

#[test]
fn dialog_creates_state_file() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("dialog.json");
    seeded(&["dialog", "--state", state.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dialog"));
    let saved = fs::read_to_string(&state).unwrap();
    assert!(saved.contains("\"active\""));
}

#[test]
fn dialog_bulk_respects_cap() {
    let output = seeded(&["--json", "dialog", "--bulk", "--cap", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let exchanges = value.as_array().unwrap();
    assert!(!exchanges.is_empty() && exchanges.len() <= 3);
}

#[test]
fn dungeon_keeps_state_between_rolls() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("dungeon.json");
    let path = state.to_str().unwrap();
    seeded(&["dungeon", "--state", path, "--passage", "--condition"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dungeon Area"));
    assert!(fs::read_to_string(&state).unwrap().contains("\"phase\""));
    seeded(&["dungeon", "--state", path]).assert().success();
}

#[test]
fn dungeon_unknown_passage_mode_rolls_straight() {
    seeded(&["dungeon", "--passage", "--passage-mode", "sideways"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dungeon Area"));
}

#[test]
fn dungeon_rejects_corrupt_state() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("dungeon.json");
    fs::write(&state, "{ not json").unwrap();
    seeded(&["dungeon", "--state", state.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("invalid state file")
                .and(predicate::str::contains("caused by:")),
        );
}

#[test]
fn dialog_state_off_the_grid_is_clamped() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("dialog.json");
    fs::write(&state, r#"{ "row": -1, "col": 7, "active": true }"#).unwrap();
    let output = seeded(&["--json", "dialog", "--state", state.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metadata"]["from"]["row"], 0);
    assert_eq!(value["metadata"]["from"]["col"], 4);
}

#[test]
fn trap_with_check_reports_outcome() {
    seeded(&["trap", "--searching", "--check", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("check 25,"));
}

#[test]
fn trap_without_check_explains_stakes() {
    seeded(&["trap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pass to locate"));
}

#[test]
fn wilderness_move_then_encounter() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("hex.json");
    let path = state.to_str().unwrap();
    seeded(&["wilderness", "move", "--state", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wilderness"));
    assert!(fs::read_to_string(&state).unwrap().contains("environment_row"));
    seeded(&["wilderness", "encounter", "--state", path, "--guide", "--apply-trigger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wilderness Encounter"));
}

#[test]
fn wilderness_monster_without_state() {
    seeded(&["wilderness", "monster"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monster"));
}

#[test]
fn lost_party_rolls_d6() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("hex.json");
    fs::write(
        &state,
        r#"{ "environment_row": 5, "type_row": 5, "lost": true }"#,
    )
    .unwrap();
    let output = seeded(&["--json", "wilderness", "encounter", "--state", state.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metadata"]["sides"], 6);
}
