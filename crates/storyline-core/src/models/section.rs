use serde::{Deserialize, Serialize};

use super::{ChartReference, StoryKpi};

/// A thematic group of insights.
///
/// `narrative` is empty until the synthesizer fills it for a specific mode;
/// everything else is identical across modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySection {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub thesis: String,
    pub kpis: Vec<StoryKpi>,
    pub charts: Vec<ChartReference>,
    pub insight_ids: Vec<String>,
    pub narrative: String,
    /// 1-based display position.
    pub order: usize,
}
