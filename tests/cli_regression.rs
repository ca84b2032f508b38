// Regression tests for the casebook CLI surface: exit codes, report
// rendering, JSON output, and the list subcommand.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn run_reports_all_demo_cases_passing() {
    let mut cmd = Command::cargo_bin("casebook").unwrap();
    cmd.arg("run");
    cmd.assert()
        .success()
        .stdout(contains("total 5 | passed 5 | failed 0"))
        .stdout(contains("PASS: process code: valid AG-123456"))
        .stdout(contains("pass rate: 100.0%"));
}

#[test]
fn filter_with_no_match_runs_empty_suite() {
    let mut cmd = Command::cargo_bin("casebook").unwrap();
    cmd.args(["run", "--filter", "no such case"]);
    cmd.assert()
        .success()
        .stdout(contains("total 0 | passed 0 | failed 0"))
        .stdout(contains("pass rate: 0.0%"));
}

#[test]
fn filter_narrows_to_matching_cases() {
    let mut cmd = Command::cargo_bin("casebook").unwrap();
    cmd.args(["run", "--filter", "join"]);
    cmd.assert()
        .success()
        .stdout(contains("total 2 | passed 2 | failed 0"));
}

#[test]
fn json_output_is_parseable() {
    let mut cmd = Command::cargo_bin("casebook").unwrap();
    let output = cmd.args(["run", "--json"]).output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["summary"]["total"], 5);
    assert_eq!(doc["summary"]["failed"], 0);
    assert_eq!(doc["results"].as_array().unwrap().len(), 5);
    assert_eq!(doc["results"][0]["name"], "process code: valid AG-123456");
}

#[test]
fn list_prints_case_names_without_running() {
    let mut cmd = Command::cargo_bin("casebook").unwrap();
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(contains("process code: valid AG-123456"))
        .stdout(contains("join: empty roster"));

    let output = Command::cargo_bin("casebook")
        .unwrap()
        .arg("list")
        .output()
        .unwrap();
    let lines = String::from_utf8_lossy(&output.stdout).lines().count();
    assert_eq!(lines, 5);
}
