//! CLI tests for the sw binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sw(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sw").expect("binary should build");
    // keep project-local and user config lookups inside the temp dir
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"));
    cmd
}

#[test]
fn test_derive_defaults_to_fresh_install() {
    let temp = TempDir::new().unwrap();
    sw(&temp)
        .args(["derive", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start your journey"))
        .stdout(predicate::str::contains("🔥 0 days"))
        .stdout(predicate::str::contains("S S M T W T F"));
}

#[test]
fn test_derive_json_snapshot() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("snapshot.json");
    fs::write(
        &snapshot,
        r#"{"current_streak": 5, "completion": "1101110", "has_any_habits": true, "user_name": "Alex"}"#,
    )
    .unwrap();

    sw(&temp)
        .args(["derive", "--date", "2024-03-15", "--format", "json", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"subtitle_text\": \"Alex! Streak?\""))
        .stdout(predicate::str::contains("\"circle_state\": \"missed\""))
        .stdout(predicate::str::contains("\"cta_text\": \"Stay Consistent\""));
}

#[test]
fn test_derive_prefs_with_compact_layout() {
    let temp = TempDir::new().unwrap();
    let prefs = temp.path().join("prefs.yaml");
    fs::write(&prefs, "streak_current: 12\nstreak_days: \"1111111\"\nhas_any_habits: true\n").unwrap();

    sw(&temp)
        .args(["derive", "--prefs", "--layout", "compact", "--date", "2024-03-15", "--snapshot"])
        .arg(&prefs)
        .assert()
        .success()
        .stdout(predicate::str::contains("🔥 12\n"))
        .stdout(predicate::str::contains("[You're doing great!]"));
}

#[test]
fn test_config_file_sets_output_format() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("sw.yml");
    fs::write(&config, "layout: compact\noutput: yaml\ncta_mode: none\n").unwrap();

    sw(&temp)
        .args(["derive", "--date", "2024-03-15", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "subtitle_text: Create your first task to start your streak",
        ))
        .stdout(predicate::str::contains("cta_text").not());
}

#[test]
fn test_missing_snapshot_fails() {
    let temp = TempDir::new().unwrap();
    sw(&temp)
        .args(["derive", "--snapshot", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load snapshot"));
}

#[test]
fn test_config_command_prints_resolved_options() {
    let temp = TempDir::new().unwrap();
    sw(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("layout: hero"))
        .stdout(predicate::str::contains("copy_mode: contextual"));
}

// dirs::config_dir honors XDG_CONFIG_HOME on Linux only
#[cfg(target_os = "linux")]
#[test]
fn test_user_config_dir_is_read() {
    let temp = TempDir::new().unwrap();
    let user_dir = temp.path().join(".config").join("streakwidget");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("streakwidget.yml"), "copy_mode: streak_tiered\n").unwrap();

    let snapshot = temp.path().join("snapshot.json");
    fs::write(&snapshot, r#"{"current_streak": 1, "has_any_habits": true}"#).unwrap();

    sw(&temp)
        .args(["derive", "--date", "2024-03-15", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Great start — day 1 done!"));
}

#[test]
fn test_broken_local_config_is_logged_and_skipped() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("streakwidget.yml"), "layout: [not, a, layout]\n").unwrap();

    sw(&temp)
        .args(["derive", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start your journey"))
        .stderr(predicate::str::contains("Failed to load config from streakwidget.yml"));
}
