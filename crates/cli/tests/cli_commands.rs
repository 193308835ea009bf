use std::path::Path;

use predicates::prelude::*;
use tempfile::tempdir;

const MANIFEST: &str = r#"
name: inbox.db
version: 3
require_migration: true
migrations:
  - start_version: 1
    end_version: 2
    statements:
      - CREATE TABLE labels (id INTEGER PRIMARY KEY, name TEXT NOT NULL)
  - start_version: 2
    end_version: 3
    statements:
      - ALTER TABLE messages ADD COLUMN label_id INTEGER
      - CREATE INDEX messages_label ON messages (label_id)
"#;

fn write_manifest(dir: &Path, file: &str, body: &str) -> String {
    let path = dir.join(file);
    std::fs::write(&path, body).expect("write manifest");
    path.to_string_lossy().to_string()
}

/// Running without a subcommand should print usage and fail.
#[test]
fn missing_subcommand_fails() {
    assert_cmd::cargo::cargo_bin_cmd!("modeldb").assert().failure();
}

#[test]
fn inspect_lists_declaration_and_migrations() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(dir.path(), "inbox.yaml", MANIFEST);

    assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("inspect")
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: inbox.db"))
        .stdout(predicate::str::contains("Version: 3"))
        .stdout(predicate::str::contains("Require migration: yes"))
        .stdout(predicate::str::contains("2 -> 3 (2 statements)"));
}

#[test]
fn inspect_json_includes_checksums() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(dir.path(), "inbox.yaml", MANIFEST);

    let output = assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("inspect")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--json")
        .output()
        .expect("run inspect");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["name"], "inbox.db");
    assert_eq!(json["migrations"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(json["migrations"][0]["checksum"].as_str().map(|s| s.len()), Some(64));
}

#[test]
fn inspect_fails_for_missing_manifest() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("inspect")
        .arg("--manifest")
        .arg(dir.path().join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read database manifest"));
}

#[test]
fn plan_walks_path_to_manifest_version() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(dir.path(), "inbox.yaml", MANIFEST);

    assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("plan")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--from")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration plan for inbox.db (1 -> 3)"))
        .stdout(predicate::str::contains("1. 1 -> 2"))
        .stdout(predicate::str::contains("2. 2 -> 3"));
}

#[test]
fn plan_reports_up_to_date() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(dir.path(), "inbox.yaml", MANIFEST);

    assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("plan")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--from")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn strict_manifest_without_path_fails() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(dir.path(), "inbox.yaml", MANIFEST);

    assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("plan")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--from")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot migrate 'inbox.db' from 0 to 3"));
}

#[test]
fn lenient_manifest_without_path_recreates() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(
        dir.path(),
        "cache.json",
        r#"{ "name": "cache.db", "version": 5, "migrations": [] }"#,
    );

    let output = assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("plan")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--from")
        .arg("2")
        .arg("--json")
        .output()
        .expect("run plan");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["plan"]["action"], "recreate");
    assert_eq!(json["to"], 5);
}

#[test]
fn plan_honours_explicit_downgrade_target() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(
        dir.path(),
        "inbox.yaml",
        "name: inbox.db\nversion: 3\nmigrations:\n  - start_version: 3\n    end_version: 2\n",
    );

    assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("plan")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--from")
        .arg("3")
        .arg("--to")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 3 -> 2"));
}

#[test]
fn strict_downgrade_without_path_names_both_versions() {
    let dir = tempdir().expect("tempdir");
    let manifest = write_manifest(dir.path(), "inbox.yaml", MANIFEST);

    assert_cmd::cargo::cargo_bin_cmd!("modeldb")
        .arg("plan")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--from")
        .arg("3")
        .arg("--to")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot migrate 'inbox.db' from 3 to 1"));
}
