//! Insight document loading and manifest persistence.
//!
//! The only module in the workspace that touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use storyline_core::constants::MANIFEST_FILE_SUFFIX;
use storyline_core::errors::{AdapterError, SerializationError};
use storyline_core::models::{RawInsight, StoryManifest};
use storyline_core::text::slugify;
use storyline_observability::persist_span;
use storyline_observability::tracing_setup::events;
use tracing::debug;

/// Load upstream insight records from a JSON document.
///
/// Accepts a bare array of records or an object with an `insights` array.
pub fn load_insights(path: &Path) -> Result<Vec<RawInsight>, AdapterError> {
    let content = fs::read_to_string(path).map_err(|e| AdapterError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_insights(&content).map_err(|message| AdapterError::Malformed {
        path: path.display().to_string(),
        message,
    })
}

fn parse_insights(content: &str) -> Result<Vec<RawInsight>, String> {
    let document: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let records = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map
            .remove("insights")
            .ok_or_else(|| "object has no 'insights' array".to_string())?,
        _ => return Err("expected an array or an object with 'insights'".to_string()),
    };
    if !records.is_array() {
        return Err("'insights' is not an array".to_string());
    }
    serde_json::from_value(records).map_err(|e| e.to_string())
}

/// `<project-slug>.<mode>.story.json`
pub fn manifest_file_name(manifest: &StoryManifest) -> String {
    let slug = slugify(&manifest.project_name);
    let slug = if slug.is_empty() { "story".to_string() } else { slug };
    format!("{slug}.{}.{MANIFEST_FILE_SUFFIX}", manifest.narrative_mode)
}

/// Write `manifest` as pretty-printed JSON into `dir`, creating it if needed.
///
/// On failure the error carries a copy of the manifest.
pub fn write_manifest(manifest: &StoryManifest, dir: &Path) -> Result<PathBuf, SerializationError> {
    let path = dir.join(manifest_file_name(manifest));
    let span = persist_span!(path.display());
    let _guard = span.enter();

    let json = serde_json::to_string_pretty(manifest).map_err(|e| SerializationError::Encode {
        message: e.to_string(),
        manifest: Box::new(manifest.clone()),
    })?;

    let write_failed = |e: std::io::Error| SerializationError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
        manifest: Box::new(manifest.clone()),
    };
    fs::create_dir_all(dir).map_err(write_failed)?;
    fs::write(&path, json.as_bytes()).map_err(write_failed)?;

    events::manifest_written(
        &manifest.id,
        manifest.narrative_mode.as_str(),
        &path.display().to_string(),
        json.len(),
    );
    Ok(path)
}

/// Write each manifest into `dir`. Stops at the first failure.
pub fn write_manifests(
    manifests: &[StoryManifest],
    dir: &Path,
) -> Result<Vec<PathBuf>, SerializationError> {
    manifests.iter().map(|m| write_manifest(m, dir)).collect()
}

/// Read a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<StoryManifest, SerializationError> {
    let content = fs::read_to_string(path).map_err(|e| SerializationError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let manifest: StoryManifest =
        serde_json::from_str(&content).map_err(|e| SerializationError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    debug!(id = %manifest.id, path = %path.display(), "manifest read");
    Ok(manifest)
}
