//! # storyline-core
//!
//! Foundation crate for the Storyline narrative pipeline.
//! Defines all models, traits, errors, config, constants and the shared
//! number formatter. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod formatting;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StoryConfig;
pub use errors::{StoryError, StoryResult};
pub use models::{
    Insight, NarrativeMode, RawInsight, Score, StoryKpi, StoryManifest, StorySection,
    StoryThesis,
};
