//! Test fixture loader for Storyline golden insight sets.
//!
//! Golden files live in this crate's `golden/` directory; helpers resolve
//! them from any crate in the workspace.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // From crates/<member>, walk up until crates/test-fixtures is visible.
    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Synthetic insight records for benchmarks, as a JSON array.
///
/// Cycles through a fixed set of phrasings and categories so the output is
/// deterministic for a given `count`.
pub fn synthetic_insights(count: usize) -> serde_json::Value {
    const CATEGORIES: [&str; 5] = ["trend", "comparison", "anomaly", "distribution", "correlation"];
    const SEVERITIES: [&str; 4] = ["critical", "key", "supporting", "minor"];
    const SUBJECTS: [&str; 6] = ["revenue", "churn", "basket size", "returns", "conversion", "backlog"];

    let records = (0..count)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            serde_json::json!({
                "id": format!("synthetic-{}", i + 1),
                "text": format!(
                    "Regional {subject} moved {}% in Q{} with {},{:03} accounts affected",
                    5 + i % 40,
                    1 + i % 4,
                    1 + i % 9,
                    (i * 37) % 1000
                ),
                "category": CATEGORIES[i % CATEGORIES.len()],
                "severity": SEVERITIES[i % SEVERITIES.len()],
                "confidence": 0.6 + (i % 4) as f64 * 0.1,
            })
        })
        .collect();
    serde_json::Value::Array(records)
}
