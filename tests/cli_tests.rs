//! CLI tests
//!
//! Exercises the rowsieve binary directly with assert_cmd, covering the help
//! surface, validation failures and a full filter run.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

fn write_roster(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Matrícula").unwrap();
    worksheet.write_string(0, 1, "Name").unwrap();
    worksheet.write_string(1, 0, "A1").unwrap();
    worksheet.write_string(1, 1, "X").unwrap();
    worksheet.write_string(2, 0, "B2").unwrap();
    worksheet.write_string(2, 1, "Y").unwrap();
    worksheet.write_string(3, 0, "A1").unwrap();
    worksheet.write_string(3, 1, "Z").unwrap();

    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rowsieve"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rowsieve"));
}

#[test]
fn test_filter_help() {
    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.args(["filter", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("identifier list"));
}

#[test]
fn test_inspect_help() {
    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.args(["inspect", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first sheet"));
}

// ═══════════════════════════════════════════════════════════════════════════
// VALIDATION FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_filter_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let ids = temp_dir.path().join("ids.txt");
    std::fs::write(&ids, "A1\n").unwrap();

    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["filter", "missing.xlsx", "--ids"])
        .arg(&ids)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_filter_blank_identifier_list() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("roster.xlsx");
    let ids = temp_dir.path().join("ids.txt");
    write_roster(&input);
    std::fs::write(&ids, "\n  \n\t\n").unwrap();

    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["filter"])
        .arg(&input)
        .arg("--ids")
        .arg(&ids)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Identifier list is empty"));

    // Validation failures must not produce an output file
    assert!(!temp_dir.path().join("processed_data.xlsx").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// FILTER RUNS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_filter_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("roster.xlsx");
    let ids = temp_dir.path().join("ids.txt");
    let output = temp_dir.path().join("clean.xlsx");
    write_roster(&input);
    std::fs::write(&ids, "A1\n").unwrap();

    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.args(["filter"])
        .arg(&input)
        .arg("--ids")
        .arg(&ids)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total rows:     3"))
        .stdout(predicate::str::contains("Removed rows:   2"))
        .stdout(predicate::str::contains("Remaining rows: 1"));

    assert!(output.exists());
}

#[test]
fn test_filter_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("roster.xlsx");
    let ids = temp_dir.path().join("ids.txt");
    let output = temp_dir.path().join("clean.xlsx");
    write_roster(&input);
    std::fs::write(&ids, "A1\n").unwrap();

    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.args(["filter"])
        .arg(&input)
        .arg("--ids")
        .arg(&ids)
        .arg("--output")
        .arg(&output)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run complete"));

    assert!(!output.exists());
}

#[test]
fn test_filter_ids_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("roster.xlsx");
    let output = temp_dir.path().join("clean.xlsx");
    write_roster(&input);

    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.args(["filter"])
        .arg(&input)
        .args(["--ids", "-"])
        .arg("--output")
        .arg(&output)
        .write_stdin("A1\nB2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining rows: 0"));

    assert!(output.exists());
}

#[test]
fn test_filter_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("roster.xlsx");
    let ids = temp_dir.path().join("ids.txt");
    let output = temp_dir.path().join("clean.xlsx");
    write_roster(&input);
    std::fs::write(&ids, "A1\n").unwrap();

    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    let assert = cmd
        .args(["filter"])
        .arg(&input)
        .arg("--ids")
        .arg(&ids)
        .arg("--output")
        .arg(&output)
        .arg("--json")
        .assert()
        .success();

    let stdout = assert.get_output().stdout.clone();
    let summary: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(summary["total_rows"], 3);
    assert_eq!(summary["removed_rows"], 2);
    assert_eq!(summary["remaining_rows"], 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_lists_columns() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("roster.xlsx");
    write_roster(&input);

    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrícula"))
        .stdout(predicate::str::contains("3 data rows"));
}

#[test]
fn test_inspect_missing_file() {
    let mut cmd = Command::cargo_bin("rowsieve").unwrap();
    cmd.args(["inspect", "missing.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
