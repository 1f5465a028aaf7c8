//! End-to-end tests for the faculty-ingest binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const LISTING: &str = "University : FAST-NUCES
Campus : Chiniot-Faisalabad
Department of Computer Science
Mr. Muhammad Talha Arif | Instructor

Department of Sciences and Humanities
Mr. Muhammad Hassnin | Instructor
Mr. Muhammad Usama Ashfaq | Lecturer | Mathematics
";

fn write_listing(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("faculty_data.txt");
    std::fs::write(&path, LISTING).expect("Failed to write listing");
    path
}

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("faculty-ingest").expect("binary is built");
    cmd.current_dir(dir.path())
        .env_remove("FACULTY_STORE_URL")
        .env_remove("FACULTY_STORE_KEY")
        .env_remove("FACULTY_LOG_OUTPUT")
        .env_remove("FACULTY_LOG_FORMAT");
    cmd
}

#[test]
fn test_parse_jsonl() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir);

    let output = cli(&dir)
        .args(["parse", "--format", "jsonl", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["department"], "Computer Science");
    assert_eq!(rows[1]["department"], "Sciences and Humanities");
    assert_eq!(rows[2]["department"], "Mathematics");
    assert_eq!(rows[2]["campus"], "Chiniot-Faisalabad");
}

#[test]
fn test_summary() {
    let dir = TempDir::new().unwrap();
    write_listing(&dir);

    cli(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 3 people"))
        .stdout(predicate::str::contains("Instructor"));
}

#[test]
fn test_dry_run_load() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir);

    let output = cli(&dir)
        .args(["load", "--dry-run", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["successful"], 3);
    assert_eq!(report["failed"], 0);
    assert_eq!(report["cleared"], true);
}

#[test]
fn test_load_without_store_config_fails() {
    let dir = TempDir::new().unwrap();
    write_listing(&dir);

    cli(&dir)
        .arg("load")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["parse", "--input", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}
