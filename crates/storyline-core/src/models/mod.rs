//! Data model for the narrative pipeline: upstream insight records, the
//! normalized `Insight`, and every entity that ends up in a `StoryManifest`.

mod chart;
mod insight;
mod kpi;
mod manifest;
mod mode;
mod score;
mod section;
mod thesis;

pub use chart::{AxisRole, ChartKind, ChartParams, ChartReference, ChartSpec, EmphasisHint};
pub use insight::{Insight, InsightCategory, RawInsight, SkippedRecord};
pub use kpi::{KpiKind, StoryKpi, ValueSemantics};
pub use manifest::{ManifestMetadata, StoryManifest};
pub use mode::NarrativeMode;
pub use score::Score;
pub use section::StorySection;
pub use thesis::{StoryThesis, ThesisFrame};
