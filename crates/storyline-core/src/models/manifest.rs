use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NarrativeMode, SkippedRecord, StoryKpi, StorySection, StoryThesis};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub generated_at: DateTime<Utc>,
    /// Number of records received from upstream, skipped ones included.
    pub source_insight_count: usize,
    pub skipped_insight_count: usize,
    #[serde(default)]
    pub skipped_records: Vec<SkippedRecord>,
    pub objective: Option<String>,
    /// blake3 hash of the adapted insight set. Equal across the modes of one build.
    pub source_hash: String,
    pub generator: String,
    pub generator_version: String,
}

/// The complete story artifact handed to downstream renderers.
///
/// Renderers treat it as the single source of truth and never go back to the
/// raw insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryManifest {
    pub id: String,
    pub project_name: String,
    pub thesis: StoryThesis,
    pub top_kpis: Vec<StoryKpi>,
    pub sections: Vec<StorySection>,
    pub narrative_mode: NarrativeMode,
    pub executive_summary: String,
    pub key_findings: Vec<String>,
    pub metadata: ManifestMetadata,
}

impl StoryManifest {
    /// Every insight id the manifest references, in first-seen order.
    pub fn referenced_insight_ids(&self) -> Vec<&str> {
        let thesis = self
            .thesis
            .supporting_insight_ids
            .iter()
            .map(String::as_str);
        let top = self
            .top_kpis
            .iter()
            .filter_map(|k| k.source_insight_id.as_deref());
        let sections = self.sections.iter().flat_map(|s| {
            s.insight_ids
                .iter()
                .map(String::as_str)
                .chain(s.kpis.iter().filter_map(|k| k.source_insight_id.as_deref()))
                .chain(s.charts.iter().map(|c| c.insight_id.as_str()))
        });

        let mut seen: Vec<&str> = Vec::new();
        for id in thesis.chain(top).chain(sections) {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }
}
