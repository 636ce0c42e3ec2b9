//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use listtube::catalog::Video;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write `videos` as a search-response JSON catalog in a fresh temp dir.
pub fn temp_catalog(videos: &[Video]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    let document = serde_json::json!({ "items": videos });
    std::fs::write(&path, document.to_string()).expect("Failed to write catalog");
    (temp_dir, path)
}

pub fn sample_videos() -> Vec<Video> {
    vec![
        Video::new("v1", "Rust for beginners", "Ownership explained"),
        Video::new("v2", "List virtualization", "Render only what changed"),
        Video::new("v3", "Cooking with cast iron", "Seasoning and rust removal"),
    ]
}
