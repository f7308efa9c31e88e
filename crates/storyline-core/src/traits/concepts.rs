/// Builds a concept bag for each insight text.
///
/// Returns one bag per input text, in input order. A bag holds distinct
/// lowercase concepts in first-seen order.
pub trait IConceptExtractor: Send + Sync {
    fn concept_bags(&self, texts: &[&str]) -> Vec<Vec<String>>;

    /// Extractor name, recorded in logs.
    fn name(&self) -> &str;
}
