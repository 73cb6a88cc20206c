use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn demo_prints_reports_and_chart() {
    let mut cmd = Command::cargo_bin("budget_ledger_demo").expect("binary exists");
    cmd.env_remove("BUDGET_LEDGER_CONFIG")
        .assert()
        .success()
        .stdout(predicate::str::contains("*************Food*************"))
        .stdout(predicate::str::contains("Restaurant and more foo -15.89"))
        .stdout(predicate::str::contains("Transfer from Food       50.00"))
        .stdout(predicate::str::contains("Total:                2,050.00"))
        .stdout(predicate::str::contains("Percentage spent by category"))
        .stdout(predicate::str::contains("  0| o  o  o  o"));
}

#[test]
fn demo_honours_config_file() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("report.json");
    fs::write(&path, r#"{ "title_fill": "-", "chart_marker": "x" }"#).expect("write config");

    let mut cmd = Command::cargo_bin("budget_ledger_demo").expect("binary exists");
    cmd.env("BUDGET_LEDGER_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("-------------Food-------------"))
        .stdout(predicate::str::contains("  0| x  x  x  x"));
}

#[test]
fn demo_rejects_invalid_config() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("report.json");
    fs::write(&path, r#"{ "title_width": 10 }"#).expect("write config");

    let mut cmd = Command::cargo_bin("budget_ledger_demo").expect("binary exists");
    cmd.env("BUDGET_LEDGER_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
