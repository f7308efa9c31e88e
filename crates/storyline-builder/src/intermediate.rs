//! Mode-independent build state shared by every render.

use storyline_core::errors::ExtractionWarning;
use storyline_core::models::{Insight, SkippedRecord, StoryKpi, StorySection, StoryThesis};

/// Everything a build recovered from instead of failing on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildReport {
    pub skipped: Vec<SkippedRecord>,
    pub warnings: Vec<ExtractionWarning>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.warnings.is_empty()
    }
}

/// Thesis, KPIs and section assignment computed once per build.
///
/// Immutable after `StoryBuilder::prepare`; each mode render reads it and
/// only re-runs the synthesizer, so the modes of one build cannot disagree
/// on structure.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryIntermediate {
    pub project_name: String,
    pub objective: Option<String>,
    pub insights: Vec<Insight>,
    pub thesis: StoryThesis,
    pub top_kpis: Vec<StoryKpi>,
    /// Sections with empty narratives.
    pub sections: Vec<StorySection>,
    pub report: BuildReport,
    /// Records received from upstream, skipped ones included.
    pub source_count: usize,
    pub source_hash: String,
}

impl StoryIntermediate {
    pub fn insight_ids(&self) -> Vec<&str> {
        self.insights.iter().map(|i| i.id.as_str()).collect()
    }
}

/// blake3 over the adapted insight set, in order.
pub(crate) fn source_hash(insights: &[Insight]) -> String {
    let mut hasher = blake3::Hasher::new();
    for insight in insights {
        hasher.update(insight.id.as_bytes());
        hasher.update(&[0]);
        hasher.update(insight.category.as_bytes());
        hasher.update(&[0]);
        hasher.update(insight.text.as_bytes());
        hasher.update(&[0]);
        hasher.update(&insight.confidence.value().to_le_bytes());
        hasher.update(&insight.business_value.value().to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
