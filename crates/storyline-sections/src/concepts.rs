//! Keyword concept extractor: tokenize, drop stop-words and numbers, keep
//! content words of a minimum length.

use storyline_core::config::defaults::DEFAULT_MIN_CONCEPT_LEN;
use storyline_core::traits::IConceptExtractor;

/// Stop-words plus the change verbs every insight uses, which would
/// otherwise become concepts of their own.
fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "about"
            | "above"
            | "across"
            | "after"
            | "again"
            | "against"
            | "also"
            | "among"
            | "around"
            | "because"
            | "been"
            | "before"
            | "being"
            | "below"
            | "between"
            | "both"
            | "came"
            | "could"
            | "declined"
            | "decreased"
            | "does"
            | "down"
            | "dropped"
            | "during"
            | "each"
            | "fell"
            | "from"
            | "grew"
            | "have"
            | "held"
            | "into"
            | "increased"
            | "kept"
            | "least"
            | "less"
            | "more"
            | "most"
            | "much"
            | "only"
            | "over"
            | "reached"
            | "reaching"
            | "rose"
            | "same"
            | "says"
            | "should"
            | "since"
            | "slipped"
            | "some"
            | "still"
            | "such"
            | "than"
            | "that"
            | "their"
            | "them"
            | "then"
            | "there"
            | "these"
            | "they"
            | "this"
            | "those"
            | "through"
            | "under"
            | "until"
            | "very"
            | "were"
            | "what"
            | "when"
            | "where"
            | "which"
            | "while"
            | "will"
            | "with"
            | "within"
            | "would"
    )
}

/// Frequency-heuristic concept extractor.
#[derive(Debug, Clone, Copy)]
pub struct KeywordConceptExtractor {
    min_len: usize,
}

impl KeywordConceptExtractor {
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Distinct concepts of one text, in first-seen order.
    pub fn concepts(&self, text: &str) -> Vec<String> {
        let mut bag: Vec<String> = Vec::new();
        for token in text.split(|c: char| !c.is_alphanumeric()) {
            let word = token.to_lowercase();
            if word.chars().count() < self.min_len
                || word.chars().any(|c| c.is_ascii_digit())
                || is_stop_word(&word)
                || bag.contains(&word)
            {
                continue;
            }
            bag.push(word);
        }
        bag
    }
}

impl Default for KeywordConceptExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONCEPT_LEN)
    }
}

impl IConceptExtractor for KeywordConceptExtractor {
    fn concept_bags(&self, texts: &[&str]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.concepts(t)).collect()
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
