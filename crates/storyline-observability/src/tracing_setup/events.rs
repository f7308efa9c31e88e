//! Structured log events for key build operations.
//!
//! Each function emits a `tracing` event with structured fields.

use storyline_core::errors::ExtractionWarning;
use storyline_core::models::SkippedRecord;

/// Log a record the adapter could not use.
pub fn insight_skipped(record: &SkippedRecord) {
    tracing::warn!(
        event = "insight_skipped",
        index = record.index,
        id = ?record.id,
        reason = %record.reason,
        "insight record skipped"
    );
}

/// Log a recovered extraction condition.
pub fn extraction_warning(warning: &ExtractionWarning) {
    tracing::warn!(
        event = "extraction_warning",
        warning = %warning,
        "extraction warning"
    );
}

/// Log the end of the shared preparation phase.
pub fn build_completed(insights: usize, skipped: usize, sections: usize, top_kpis: usize) {
    tracing::info!(
        event = "build_completed",
        insights = insights,
        skipped = skipped,
        sections = sections,
        top_kpis = top_kpis,
        "story build completed"
    );
}

/// Log a manifest persisted to disk.
pub fn manifest_written(manifest_id: &str, mode: &str, path: &str, bytes: usize) {
    tracing::info!(
        event = "manifest_written",
        manifest_id = %manifest_id,
        mode = %mode,
        path = %path,
        bytes = bytes,
        "manifest written"
    );
}
