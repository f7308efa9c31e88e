//! # storyline-narrative
//!
//! Presentation-only prose. Templates substitute thesis text and KPI values
//! verbatim; nothing here computes or prints a number of its own.

pub mod confidence;
pub mod synthesizer;
pub mod templates;
pub mod vocabulary;

pub use confidence::ConfidenceLevel;
pub use synthesizer::{
    synthesize_executive_summary, synthesize_key_findings, synthesize_section_narrative,
    Narration, NarrativeSynthesizer,
};
pub use vocabulary::{dominant_semantics, Vocabulary};
