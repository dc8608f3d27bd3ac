#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use base64::Engine as _;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PLAN_JSON: &str = r#"{
  "name": "Burn Deck",
  "difficulty": "hard",
  "floorTargets": [
    {
      "number": 1,
      "packName": "Fire Pack",
      "gifts": [
        {"id": 1, "name": "Ember Heart", "tier": 3, "keyword": "화상"},
        {"id": 2, "name": "Cinder Shard", "tier": 2, "keyword": "화상"}
      ],
      "synthesisGifts": [
        {"id": 100, "name": "Forge Core", "tier": "EX", "keyword": "화상", "ingredients": [1, 2]}
      ],
      "memo": "Take the fire pack"
    }
  ],
  "startingGifts": [{"id": 2, "name": "Cinder Shard", "tier": 2}],
  "allGifts": [
    {"id": 1, "name": "Ember Heart", "tier": 3, "keyword": "화상"},
    {"id": 2, "name": "Cinder Shard", "tier": 2, "keyword": "화상"},
    {"id": 100, "name": "Forge Core", "tier": "EX", "keyword": "화상", "ingredients": [1, 2]}
  ],
  "synthesisIds": [100],
  "acquisitionOrder": [
    {"priorities": [[{"id": 1, "name": "Ember Heart"}], [{"name": "Forge Core"}]]}
  ]
}"#;

fn giftplan(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("giftplan"));
    cmd.env("GIFTPLAN_HOME", home.as_os_str())
        .env_remove("RUST_LOG");
    cmd
}

fn home_with_plan() -> TempDir {
    let temp = TempDir::new().unwrap();
    let plan_path = temp.path().join("burn.json");
    fs::write(&plan_path, PLAN_JSON).unwrap();

    giftplan(temp.path())
        .args(["load", "--file", plan_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded plan Burn Deck from JSON"));
    temp
}

#[test]
fn commands_without_a_plan_fail() {
    let temp = TempDir::new().unwrap();
    giftplan(temp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No plan loaded"));
}

#[test]
fn toggle_cascades_and_persists() {
    let temp = home_with_plan();

    giftplan(temp.path())
        .args(["toggle", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acquired: Forge Core (+2 ingredients)"))
        .stdout(predicate::str::contains("3/3 acquired"));

    giftplan(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Burn Deck"))
        .stdout(predicate::str::contains("3/3 acquired"));

    // releasing the synthesis gift releases its ingredients too
    giftplan(temp.path())
        .args(["toggle", "Forge Core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Released: Forge Core"))
        .stdout(predicate::str::contains("0/3 acquired"));
}

#[test]
fn unknown_targets_are_reported() {
    let temp = home_with_plan();
    giftplan(temp.path())
        .args(["toggle", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No gift matches 999"));
}

#[test]
fn reloading_restores_progress() {
    let temp = home_with_plan();
    giftplan(temp.path())
        .args(["toggle", "1"])
        .assert()
        .success();

    giftplan(temp.path())
        .args(["load", PLAN_JSON])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored progress: 1/3 gifts acquired"));
}

#[test]
fn clipboard_payload_is_accepted_as_argument() {
    let temp = TempDir::new().unwrap();
    let payload = format!(
        "LIMBUS_PLAN:{}",
        base64::engine::general_purpose::STANDARD.encode(PLAN_JSON)
    );

    giftplan(temp.path())
        .args(["load", &payload])
        .assert()
        .success()
        .stdout(predicate::str::contains("from clipboard payload"));
}

#[test]
fn garbage_is_rejected() {
    let temp = TempDir::new().unwrap();
    giftplan(temp.path())
        .args(["load", "definitely not a plan"])
        .assert()
        .failure();
}

#[test]
fn reset_needs_confirmation() {
    let temp = home_with_plan();
    giftplan(temp.path())
        .args(["toggle", "100"])
        .assert()
        .success();

    giftplan(temp.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes"));
    giftplan(temp.path())
        .arg("status")
        .assert()
        .stdout(predicate::str::contains("3/3 acquired"));

    giftplan(temp.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 3 acquired gifts"));
    giftplan(temp.path())
        .arg("status")
        .assert()
        .stdout(predicate::str::contains("0/3 acquired"));
}

#[test]
fn gifts_filter_by_tier() {
    let temp = home_with_plan();
    giftplan(temp.path())
        .args(["gifts", "-t", "ex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forge Core"))
        .stdout(predicate::str::contains("Ember Heart").not())
        .stdout(predicate::str::contains("1 of 3 gifts match"));
}

#[test]
fn floor_pages() {
    let temp = home_with_plan();
    giftplan(temp.path())
        .args(["floor", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Floor 1 · Fire Pack"))
        .stdout(predicate::str::contains("Synthesis"))
        .stdout(predicate::str::contains("Take the fire pack"));

    giftplan(temp.path())
        .arg("floor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting gifts"))
        .stdout(predicate::str::contains("Cinder Shard"));

    giftplan(temp.path())
        .args(["floor", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn order_lists_rows() {
    let temp = home_with_plan();
    giftplan(temp.path())
        .arg("order")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Ember Heart] → [Forge Core]"));
}

#[test]
fn config_round_trip() {
    let temp = TempDir::new().unwrap();
    giftplan(temp.path())
        .args(["config", "view-mode", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view-mode set to name"));

    giftplan(temp.path())
        .args(["config", "view-mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view-mode = name"));

    giftplan(temp.path())
        .args(["config", "opacity", "1"])
        .assert()
        .failure();
}

#[test]
fn version_compares_release_tags() {
    let temp = TempDir::new().unwrap();
    giftplan(temp.path())
        .args(["version", "v99.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is available"));
    giftplan(temp.path())
        .args(["version", "0.0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date"));
}
