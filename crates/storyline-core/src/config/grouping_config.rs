use serde::{Deserialize, Serialize};

use super::defaults;

/// Section grouping configuration.
///
/// The occurrence threshold is adaptive: corpora smaller than
/// `small_corpus_size` only need `small_corpus_min_occurrences` for a concept
/// to seed a cluster, larger corpora need `min_occurrences`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub small_corpus_size: usize,
    pub small_corpus_min_occurrences: usize,
    pub min_occurrences: usize,
    /// Concepts shorter than this are dropped.
    pub min_concept_len: usize,
    pub max_sections: usize,
    pub max_title_words: usize,
}

impl GroupingConfig {
    /// Occurrence threshold for a corpus of `corpus_size` insights.
    pub fn occurrence_threshold(&self, corpus_size: usize) -> usize {
        if corpus_size < self.small_corpus_size {
            self.small_corpus_min_occurrences
        } else {
            self.min_occurrences
        }
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            small_corpus_size: defaults::DEFAULT_SMALL_CORPUS_SIZE,
            small_corpus_min_occurrences: defaults::DEFAULT_SMALL_CORPUS_MIN_OCCURRENCES,
            min_occurrences: defaults::DEFAULT_MIN_OCCURRENCES,
            min_concept_len: defaults::DEFAULT_MIN_CONCEPT_LEN,
            max_sections: defaults::DEFAULT_MAX_SECTIONS,
            max_title_words: defaults::DEFAULT_MAX_TITLE_WORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_relaxes_below_small_corpus_boundary() {
        let cfg = GroupingConfig::default();
        assert_eq!(cfg.occurrence_threshold(1), 1);
        assert_eq!(cfg.occurrence_threshold(4), 1);
        assert_eq!(cfg.occurrence_threshold(5), 2);
        assert_eq!(cfg.occurrence_threshold(40), 2);
    }
}
