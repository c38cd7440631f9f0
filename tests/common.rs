use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn sift() -> Command {
    cargo_bin_cmd!("sift")
}

/// Three notes: two near-duplicate retry notes and one unrelated note.
pub fn sample_notes_json() -> String {
    serde_json::json!([
        {
            "title": "Retry Logic",
            "content": "Retries with exponential backoff.",
            "lessonTitle": "Resilience",
            "lessonId": "l-1"
        },
        {
            "title": "retry logic!",
            "content": "Retries with exponential backoff, jitter, and a retry budget to avoid thundering herds.",
            "lessonTitle": "Resilience",
            "lessonId": "l-1"
        },
        {
            "title": "Database Indexing",
            "content": "B-tree indexes speed up range scans.",
            "lessonTitle": "Storage",
            "lessonId": "l-2"
        }
    ])
    .to_string()
}

#[allow(dead_code)]
pub fn write_notes(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("notes.json");
    fs::write(&path, json).expect("write notes fixture");
    path
}
