/// A strength/vulnerability pairing found across the corpus.
///
/// Indices point into the text slice handed to the detector. Both sides may
/// come from the same text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParadoxCandidate {
    pub strength_index: usize,
    pub vulnerability_index: usize,
    pub strength_term: String,
    pub vulnerability_term: String,
    pub strength_value: f64,
    pub vulnerability_value: f64,
}

/// Finds paradox candidates in a list of insight texts.
///
/// Candidates must come back in a deterministic order; the thesis extractor
/// takes the first one that clears its value threshold.
pub trait IParadoxDetector: Send + Sync {
    fn detect(&self, texts: &[&str]) -> Vec<ParadoxCandidate>;

    /// Detector name, recorded in logs.
    fn name(&self) -> &str;
}
