//! End-to-end tests of the nfmatch binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn nfmatch() -> Command {
    Command::cargo_bin("nfmatch").unwrap()
}

#[test]
fn search_classifies_numbers() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("NF 798541.pdf"), b"x").unwrap();

    nfmatch()
        .arg("search")
        .arg("--source")
        .arg(dir.path())
        .args(["798541", "999999", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 found, 1 not found, 1 ignored"));
}

#[test]
fn search_json_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("NF 798541.pdf"), b"x").unwrap();

    nfmatch()
        .arg("search")
        .arg("--source")
        .arg(dir.path())
        .arg("--json")
        .arg("798541")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"not_found\": []"));
}

#[test]
fn search_without_numbers_fails() {
    let dir = tempfile::tempdir().unwrap();

    nfmatch()
        .arg("search")
        .arg("--source")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no invoice numbers"));
}

#[test]
fn run_copies_into_due_date_folders() {
    let base = tempfile::tempdir().unwrap();

    // Config pointing at the temp base.
    let config_path = base.path().join("config.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "base_path": {}, "source_subdir": "incoming", "dest_subdir": "by-due-date", "extension": "pdf" }}"#,
            serde_json::to_string(base.path()).unwrap()
        ),
    )
    .unwrap();

    let source = base.path().join("incoming/2025");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("NF 798541.pdf"), b"x").unwrap();

    let dest = base.path().join("by-due-date/2025/09-2025/15-09-2025");
    fs::create_dir_all(&dest).unwrap();

    let groups_path = base.path().join("groups.json");
    fs::write(
        &groups_path,
        r#"[{ "due_date": "2025-09-15", "numbers": ["798541", "101"] }]"#,
    )
    .unwrap();

    nfmatch()
        .arg("--config")
        .arg(&config_path)
        .arg("run")
        .arg(&groups_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 copied"));

    assert!(dest.join("1- NF 798541.pdf").exists());
}

#[test]
fn validate_reports_missing_folder() {
    let base = tempfile::tempdir().unwrap();
    let config_path = base.path().join("config.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "base_path": {} }}"#,
            serde_json::to_string(base.path()).unwrap()
        ),
    )
    .unwrap();

    nfmatch()
        .arg("--config")
        .arg(&config_path)
        .arg("validate")
        .arg("2025-09-15")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing"));
}
