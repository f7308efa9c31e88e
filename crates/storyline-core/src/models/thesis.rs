use serde::{Deserialize, Serialize};

use super::Score;

/// The narrative frame that produced a thesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThesisFrame {
    Paradox,
    DominantTheme,
    Surprise,
    Fallback,
}

impl ThesisFrame {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paradox => "paradox",
            Self::DominantTheme => "dominant_theme",
            Self::Surprise => "surprise",
            Self::Fallback => "fallback",
        }
    }
}

/// The single overarching claim that frames a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryThesis {
    pub title: String,
    /// One sentence.
    pub hook: String,
    pub summary: String,
    pub implication: String,
    pub confidence: Score,
    pub supporting_insight_ids: Vec<String>,
    pub frame: ThesisFrame,
}
