//! Seams for the replaceable keyword heuristics.
//!
//! Paradox detection and concept extraction are keyword/frequency heuristics.
//! They sit behind pure text-list → candidate-list signatures so a better
//! classifier can replace them without touching extraction, grouping or
//! synthesis.

mod concepts;
mod paradox;

pub use concepts::IConceptExtractor;
pub use paradox::{IParadoxDetector, ParadoxCandidate};
