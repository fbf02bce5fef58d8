use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command with an isolated config location and no colour codes
fn fitlog(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fitlog").unwrap();
    cmd.env("FITLOG_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Training-log and body-metric analytics"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_fitlog"));
}

#[test]
fn test_analyze_text() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .args(["analyze", "Surf 45min + Squats 100kg 3x8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("45 min surf"))
        .stdout(predicate::str::contains("Squats"))
        .stdout(predicate::str::contains("Quads, Glutes"));
}

#[test]
fn test_analyze_json() {
    let dir = TempDir::new().unwrap();
    let output = fitlog(&dir)
        .args(["--json", "analyze", "Chest Press 80kg 4x10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["surfing"], serde_json::Value::Null);
    assert_eq!(value["workouts"][0]["name"], "Chest Press");
    assert_eq!(value["workouts"][0]["weight_text"], "80 KG");
    assert_eq!(value["workouts"][0]["sets_reps_text"], "4 × 10");
}

#[test]
fn test_compare_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .args([
            "compare", "--baseline", "90", "--current", "85", "--target", "80", "--days", "7",
            "--label", "Weight", "--unit", "kg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight"))
        .stdout(predicate::str::contains("-5.0 kg (-5.6%)"))
        .stdout(predicate::str::contains("50%"));
}

#[test]
fn test_compare_json_with_range_target() {
    let dir = TempDir::new().unwrap();
    let output = fitlog(&dir)
        .args([
            "--json", "compare", "--baseline", "60", "--current", "63", "--target", "66-68",
            "--direction", "up",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "improved");
    assert_eq!(value["target_value"], 68.0);
    assert_eq!(value["progress_percent"], 37.5);
    assert_eq!(value["weekly_rate"], serde_json::Value::Null);
}

#[test]
fn test_compare_rejects_bad_target() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .args(["compare", "--baseline", "1", "--current", "2", "--target", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("soon"));
}

#[test]
fn test_day_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("day")
        .arg("--file")
        .arg(fixture("dashboard.json"))
        .args(["--date", "2025-12-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 11 (2025-12-01)"))
        .stdout(predicate::str::contains("Score 4/5"))
        .stdout(predicate::str::contains("1.5 hr surf"));
}

#[test]
fn test_day_command_unknown_date() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("day")
        .arg("--file")
        .arg(fixture("dashboard.json"))
        .args(["--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No log for 2024-01-01"));
}

#[test]
fn test_progress_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("progress")
        .arg("--file")
        .arg(fixture("dashboard.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak"))
        .stdout(predicate::str::contains("82-85 kg"))
        .stdout(predicate::str::contains("ALT"));
}

#[test]
fn test_scans_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("scans")
        .arg("--file")
        .arg(fixture("body-scans.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Skeletal Muscle Mass"))
        .stdout(predicate::str::contains("Body Fat Reduction"))
        .stdout(predicate::str::contains("Dropped from 24.0% to 20.0%"));
}

#[test]
fn test_suggest_command() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("suggest")
        .arg("--file")
        .arg(fixture("training.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("205 lbs"))
        .stdout(predicate::str::contains("92.5 lbs each side (185 lbs total)"))
        .stdout(predicate::str::contains("Pull-ups").not());
}

#[test]
fn test_suggest_single_exercise_without_data() {
    let dir = TempDir::new().unwrap();
    fitlog(&dir)
        .arg("suggest")
        .arg("--file")
        .arg(fixture("training.json"))
        .args(["--exercise", "Pull-ups"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Need at least 2 sessions"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let config_file = dir.path().join("config.toml");

    fitlog(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));
    assert!(config_file.exists());

    fitlog(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    fitlog(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[goals]"))
        .stdout(predicate::str::contains("protein_goal_g = 350.0"));
}

#[test]
fn test_goal_override_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[goals]\nprotein_goal_g = 400.0\n",
    )
    .unwrap();

    let output = fitlog(&dir)
        .arg("--json")
        .arg("day")
        .arg("--file")
        .arg(fixture("dashboard.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"]["protein_met"], false);
    assert_eq!(value["score"]["training_logged"], true);
}
