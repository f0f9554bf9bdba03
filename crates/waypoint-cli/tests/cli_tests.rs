use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "title": "Frontend Roadmap",
  "description": "Browsers and beyond",
  "items": [
    { "id": "html", "name": "HTML", "description": "Markup", "status": "completed" },
    { "id": "css", "name": "CSS", "description": "Styling", "status": "in_progress" },
    { "id": "js", "name": "JavaScript", "description": "Scripting" }
  ]
}"#;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to write a roadmap document into the test directory
fn write_document(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write document");
    path
}

/// Helper function to create a Command with --no-color flag for testing
fn wp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_board_shows_sample_by_default() {
    wp_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Rust Developer Roadmap"))
        .stdout(predicate::str::contains("## Not started"))
        .stdout(predicate::str::contains("## In progress"))
        .stdout(predicate::str::contains("## Completed"))
        .stdout(predicate::str::contains("Completed: 1 of 5 topics"));
}

#[test]
fn test_cli_board_with_document() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(&temp_dir, "roadmap.json", DOCUMENT);

    wp_cmd()
        .args(["--file", path.to_str().unwrap(), "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Frontend Roadmap"))
        .stdout(predicate::str::contains("### CSS (➤ In progress)"))
        .stdout(predicate::str::contains("Completed: 1 of 3 topics"));
}

#[test]
fn test_cli_progress() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(&temp_dir, "roadmap.json", DOCUMENT);

    wp_cmd()
        .args(["--file", path.to_str().unwrap(), "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Overall progress**: 33%"))
        .stdout(predicate::str::contains("## Currently studying"))
        .stdout(predicate::str::contains("### CSS"));
}

#[test]
fn test_cli_show_item() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(&temp_dir, "roadmap.json", DOCUMENT);

    wp_cmd()
        .args(["--file", path.to_str().unwrap(), "show", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# JavaScript"))
        .stdout(predicate::str::contains("Scripting"))
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn test_cli_show_unknown_item() {
    wp_cmd()
        .args(["show", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Topic with ID 'nonexistent' not found",
        ));
}

#[test]
fn test_cli_rejected_document_reports_position() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(
        &temp_dir,
        "broken.json",
        r#"{"title":"T","items":[{"id":"a","name":"A","description":"d"},{"id":"b"}]}"#,
    );

    wp_cmd()
        .args(["--file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load roadmap"))
        .stderr(predicate::str::contains(
            "Item 2: field 'name' is missing or invalid",
        ));
}

#[test]
fn test_cli_rejects_malformed_json() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(&temp_dir, "broken.json", "{ not json");

    wp_cmd()
        .args(["--file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON"));
}

#[test]
fn test_cli_rejects_non_json_extension() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(&temp_dir, "roadmap.txt", DOCUMENT);

    wp_cmd()
        .args(["--file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'file'"));
}

#[test]
fn test_cli_validate() {
    let temp_dir = create_cli_test_environment();
    let valid = write_document(&temp_dir, "roadmap.json", DOCUMENT);
    let duplicate = write_document(
        &temp_dir,
        "duplicate.json",
        r#"{"title":"T","items":[
            {"id":"a","name":"A","description":"d"},
            {"id":"a","name":"B","description":"d"}
        ]}"#,
    );

    wp_cmd()
        .args(["--file", valid.to_str().unwrap(), "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: 'Frontend Roadmap'",
        ))
        .stdout(predicate::str::contains("valid roadmap with 3 topics"));

    wp_cmd()
        .args(["--file", duplicate.to_str().unwrap(), "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Roadmap is invalid"))
        .stderr(predicate::str::contains(
            "Item 2: id 'a' is already used by item 1",
        ));
}

#[test]
fn test_cli_update_exports_to_output() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(&temp_dir, "roadmap.json", DOCUMENT);
    let output = temp_dir.path().join("updated.json");

    wp_cmd()
        .args([
            "--file",
            path.to_str().unwrap(),
            "update",
            "js",
            "--status",
            "in-progress",
            "--notes",
            "  closures first  ",
            "--due",
            "2025-11-30",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated topic 'JavaScript'"))
        .stdout(predicate::str::contains("Exported roadmap to"));

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let item = &exported["items"][2];
    assert_eq!(item["status"], "in_progress");
    assert_eq!(item["notes"], "closures first");
    assert_eq!(item["dueDate"], "2025-11-30");
    assert_eq!(exported["items"][0]["status"], "completed");

    // The original document is left untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), DOCUMENT);
}

#[test]
fn test_cli_update_rejects_bad_due_date() {
    let temp_dir = create_cli_test_environment();

    wp_cmd()
        .args([
            "--export-dir",
            temp_dir.path().to_str().unwrap(),
            "update",
            "ownership",
            "--due",
            "next week",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'due_date'"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_update_conflicting_flags() {
    wp_cmd()
        .args(["update", "ownership", "--notes", "x", "--clear-notes"])
        .assert()
        .failure();
}

#[test]
fn test_cli_export_to_directory() {
    let temp_dir = create_cli_test_environment();

    wp_cmd()
        .args(["--export-dir", temp_dir.path().to_str().unwrap(), "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("roadmap-progress-"))
        .stdout(predicate::str::contains("1 of 5 topics completed (20%)"));

    let entries: Vec<String> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("roadmap-progress-"));
    assert!(entries[0].ends_with(".json"));
}

#[test]
fn test_cli_export_to_stdout_round_trips() {
    let temp_dir = create_cli_test_environment();
    let path = write_document(&temp_dir, "roadmap.json", DOCUMENT);

    let output = wp_cmd()
        .args(["--file", path.to_str().unwrap(), "export", "--stdout"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let exported = String::from_utf8(output.stdout).unwrap();
    assert!(exported.starts_with("{\n  \"title\": \"Frontend Roadmap\""));

    let reimported = write_document(&temp_dir, "again.json", &exported);
    wp_cmd()
        .args(["--file", reimported.to_str().unwrap(), "validate"])
        .assert()
        .success();
}
