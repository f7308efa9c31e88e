//! Label and context text for a numeric match.

use storyline_core::text::capitalize;

const MAX_LABEL_WORDS: usize = 4;

const LABEL_STOPWORDS: &[&str] = &[
    "a", "about", "almost", "an", "and", "approximately", "around", "at", "by", "for", "from",
    "in", "is", "are", "nearly", "of", "on", "or", "over", "roughly", "than", "the", "to",
    "versus", "vs", "was", "were", "with",
];

const UNIT_WORDS: &[&str] = &[
    "percent", "percentage", "point", "points", "pt", "pts", "pp", "bps",
];

/// Short label for the value at `start..end` of `text`.
///
/// Prefers up to four content words leading into the value within its
/// clause, then the words following it, then `fallback`.
pub fn kpi_label(text: &str, start: usize, end: usize, fallback: &str) -> String {
    let (clause_start, clause_end) = bounds(text, start, end, is_clause_break);

    let before = label_words(&text[clause_start..start]);
    let words = if before.is_empty() {
        let after = label_words(&text[end..clause_end]);
        after.into_iter().take(MAX_LABEL_WORDS).collect::<Vec<_>>()
    } else {
        let skip = before.len().saturating_sub(MAX_LABEL_WORDS);
        trim_stopwords(before[skip..].to_vec())
    };

    if words.is_empty() {
        return capitalize(fallback);
    }
    capitalize(&words.join(" "))
}

/// The sentence containing `start..end`, trimmed.
pub fn kpi_context(text: &str, start: usize, end: usize) -> String {
    let (s, e) = bounds(text, start, end, is_sentence_break);
    let e = match text[e..].chars().next() {
        Some(c @ ('.' | '!' | '?')) => e + c.len_utf8(),
        _ => e,
    };
    text[s..e].trim().to_string()
}

fn label_words(segment: &str) -> Vec<&str> {
    let words = segment
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '&'))
        .filter(|w| !w.is_empty())
        .filter(|w| !w.chars().any(|c| c.is_ascii_digit()))
        .filter(|w| !UNIT_WORDS.contains(&w.to_lowercase().as_str()))
        .collect();
    trim_stopwords(words)
}

fn trim_stopwords(mut words: Vec<&str>) -> Vec<&str> {
    let is_stop = |w: &&str| LABEL_STOPWORDS.contains(&w.to_lowercase().as_str());
    while words.last().is_some_and(is_stop) {
        words.pop();
    }
    let lead = words.iter().take_while(|w| is_stop(*w)).count();
    words.drain(..lead);
    words
}

fn bounds(text: &str, start: usize, end: usize, brk: fn(&str, usize, char) -> bool) -> (usize, usize) {
    let left = text[..start]
        .char_indices()
        .rev()
        .find(|&(i, c)| brk(text, i, c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let right = text[end..]
        .char_indices()
        .find(|&(i, c)| brk(text, end + i, c))
        .map_or(text.len(), |(i, _)| end + i);
    (left, right)
}

fn is_sentence_break(text: &str, i: usize, c: char) -> bool {
    matches!(c, '.' | '!' | '?')
        && text[i + c.len_utf8()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace)
}

fn is_clause_break(text: &str, i: usize, c: char) -> bool {
    match c {
        ';' | ':' | '(' | ')' => true,
        // Thousands separators are not clause breaks.
        ',' => {
            let prev_digit = text[..i].chars().next_back().is_some_and(|p| p.is_ascii_digit());
            let next_digit = text[i + 1..].chars().next().is_some_and(|n| n.is_ascii_digit());
            !(prev_digit && next_digit)
        }
        _ => is_sentence_break(text, i, c),
    }
}
