use std::{fs, path::PathBuf};

use tempfile::TempDir;
use waypoint_core::TrackerBuilder;

/// Helper function to write a roadmap document into a fresh temp dir
pub fn write_document(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("roadmap.json");
    fs::write(&path, contents).expect("Failed to write document");
    (temp_dir, path)
}

/// Helper function to create a tracker loaded from `contents`
pub async fn create_test_tracker(contents: &str) -> (TempDir, waypoint_core::Tracker) {
    let (temp_dir, path) = write_document(contents);
    let tracker = TrackerBuilder::new()
        .with_document_path(Some(&path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
