//! Non-fatal extraction problems.
//!
//! Warnings are recovered where they occur (usually by routing insights to
//! the fallback section) and collected into the build report.

use serde::{Deserialize, Serialize};

use super::error_code::{self, StoryErrorCode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionWarning {
    #[error("record {index} skipped: {reason}")]
    SkippedRecord { index: usize, reason: String },

    #[error("concept cluster '{concept}' ended up empty")]
    EmptyCluster { concept: String },

    #[error("section cap of {max_sections} reached with {remaining} insights unassigned")]
    SectionCapReached { max_sections: usize, remaining: usize },

    #[error("{count} insights routed to fallback section '{section}'")]
    FallbackSection { section: String, count: usize },

    #[error("insight {insight_id} yielded no KPI candidates")]
    NoKpiCandidates { insight_id: String },

    /// The record's own id was missing or already taken; `assigned` is the
    /// id the manifest uses for it.
    #[error("record {index} (id {original:?}) is referenced as {assigned}")]
    InsightIdAssigned {
        index: usize,
        original: Option<String>,
        assigned: String,
    },
}

impl StoryErrorCode for ExtractionWarning {
    fn error_code(&self) -> &'static str {
        error_code::EXTRACTION_WARNING
    }
}
