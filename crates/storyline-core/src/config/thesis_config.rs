use serde::{Deserialize, Serialize};

use super::defaults;

/// Thesis extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesisConfig {
    /// Both sides of a paradox need an associated value above this.
    pub paradox_min_value: f64,
    /// Share of the corpus the top category must exceed to be a theme.
    pub theme_dominance: f64,
    /// Confidence a correlation/anomaly must exceed to be a surprise.
    pub surprise_confidence: f64,
    /// Below this corpus size only the fallback frame is considered.
    pub min_frame_corpus: usize,
    pub confidence_cap: f64,
    pub fallback_confidence: f64,
    pub max_supporting_insights: usize,
}

impl Default for ThesisConfig {
    fn default() -> Self {
        Self {
            paradox_min_value: defaults::DEFAULT_PARADOX_MIN_VALUE,
            theme_dominance: defaults::DEFAULT_THEME_DOMINANCE,
            surprise_confidence: defaults::DEFAULT_SURPRISE_CONFIDENCE,
            min_frame_corpus: defaults::DEFAULT_MIN_FRAME_CORPUS,
            confidence_cap: defaults::DEFAULT_THESIS_CONFIDENCE_CAP,
            fallback_confidence: defaults::DEFAULT_FALLBACK_CONFIDENCE,
            max_supporting_insights: defaults::DEFAULT_MAX_SUPPORTING_INSIGHTS,
        }
    }
}
