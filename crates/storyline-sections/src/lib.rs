//! # storyline-sections
//!
//! Partitions insights into titled thematic sections. Concept bags come
//! from a replaceable [`IConceptExtractor`](storyline_core::traits::IConceptExtractor);
//! clustering is greedy over seed concepts ordered by document frequency.

pub mod clustering;
pub mod concepts;
pub mod grouper;
pub mod titles;

pub use concepts::KeywordConceptExtractor;
pub use grouper::{group_sections, GroupingOutcome};
