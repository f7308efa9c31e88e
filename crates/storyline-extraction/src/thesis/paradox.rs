//! Keyword paradox detector.
//!
//! Two keyword families, each hit paired with the closest number in the
//! same text. Every strength hit is paired with every vulnerability hit from
//! a different text, in text order, so callers can take the first pairing
//! that clears their threshold. A strength keyword sharing a clause with a
//! vulnerability keyword ("churn is high") qualifies the vulnerability and
//! is not a strength.

use std::sync::LazyLock;

use regex::Regex;
use storyline_core::traits::{IParadoxDetector, ParadoxCandidate};

use crate::numbers::scan_numbers;

static STRENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(satisf(?:ied|action)|loyal(?:ty)?|strong|high|positive|trust(?:ed)?|happy|promoters?)\b",
    )
    .expect("valid strength regex")
});

static VULNERABILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(at[- ]risk|risk|switch(?:ing)?|price[- ]sensitive|churn(?:ed|ing)?|cancel(?:led|lation|lations)?|defect(?:ion|ed)?|vulnerab(?:le|ility))\b",
    )
    .expect("valid vulnerability regex")
});

/// Any numeric token counts as an associated value, not only KPI-sized ones.
static ANY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid number regex"));

/// One family hit: text index, matched term, associated value.
#[derive(Debug, Clone, PartialEq)]
struct FamilyHit {
    index: usize,
    term: String,
    value: f64,
}

/// Regex keyword families for the paradox frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordParadoxDetector;

impl KeywordParadoxDetector {
    pub fn new() -> Self {
        Self
    }

    /// First hit of `family` per text. With a `veto`, keywords whose clause
    /// also matches the veto family are skipped.
    fn hits(family: &Regex, veto: Option<&Regex>, texts: &[&str]) -> Vec<FamilyHit> {
        texts
            .iter()
            .enumerate()
            .filter_map(|(index, text)| {
                let keyword = family.find_iter(text).find(|k| {
                    veto.map_or(true, |veto| {
                        let (start, end) = clause_bounds(text, k.start(), k.end());
                        !veto.is_match(&text[start..end])
                    })
                })?;
                let value = nearest_value(text, keyword.start(), keyword.end())?;
                Some(FamilyHit {
                    index,
                    term: keyword.as_str().to_lowercase(),
                    value,
                })
            })
            .collect()
    }
}

impl IParadoxDetector for KeywordParadoxDetector {
    fn detect(&self, texts: &[&str]) -> Vec<ParadoxCandidate> {
        let strengths = Self::hits(&STRENGTH, Some(&VULNERABILITY), texts);
        let vulnerabilities = Self::hits(&VULNERABILITY, None, texts);

        strengths
            .iter()
            .flat_map(|s| {
                vulnerabilities
                    .iter()
                    .filter(move |v| v.index != s.index)
                    .map(move |v| ParadoxCandidate {
                        strength_index: s.index,
                        vulnerability_index: v.index,
                        strength_term: s.term.clone(),
                        vulnerability_term: v.term.clone(),
                        strength_value: s.value,
                        vulnerability_value: v.value,
                    })
            })
            .collect()
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Clause breaks: `;` `!` `?` always, `,` and `.` unless a digit follows
/// (so "12,000" and "4.2" stay whole).
fn is_clause_break(text: &str, at: usize, c: char) -> bool {
    match c {
        ';' | '!' | '?' => true,
        ',' | '.' => !text[at + c.len_utf8()..].starts_with(|n: char| n.is_ascii_digit()),
        _ => false,
    }
}

/// Byte range of the clause containing `start..end`.
fn clause_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let left = text[..start]
        .char_indices()
        .rev()
        .find(|&(i, c)| is_clause_break(text, i, c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let right = text[end..]
        .char_indices()
        .find(|&(i, c)| is_clause_break(text, end + i, c))
        .map_or(text.len(), |(i, _)| end + i);
    (left, right)
}

/// Absolute value of the number closest to `start..end`, preferring the
/// KPI scanner's parse (suffixes applied) when it covers the token.
fn nearest_value(text: &str, start: usize, end: usize) -> Option<f64> {
    let distance = |s: usize, e: usize| {
        if e <= start {
            start - e
        } else if s >= end {
            s - end
        } else {
            0
        }
    };

    let scanned = scan_numbers(text, 1);
    ANY_NUMBER
        .find_iter(text)
        .min_by_key(|m| distance(m.start(), m.end()))
        .and_then(|m| {
            scanned
                .iter()
                .find(|s| s.overlaps(m.start(), m.end()))
                .map(|s| s.value.abs())
                .or_else(|| m.as_str().parse::<f64>().ok())
        })
}

/// Noun phrase for a strength term, for titles and prose.
pub fn strength_noun(term: &str) -> &'static str {
    let term = term.to_lowercase();
    match term.as_str() {
        t if t.starts_with("satisf") || t == "happy" => "satisfaction",
        t if t.starts_with("loyal") => "loyalty",
        t if t.starts_with("trust") => "trust",
        t if t.starts_with("promoter") => "advocacy",
        "positive" => "positive sentiment",
        "high" => "strong results",
        _ => "strength",
    }
}

/// Noun phrase for a vulnerability term.
pub fn vulnerability_noun(term: &str) -> &'static str {
    let term = term.to_lowercase();
    match term.as_str() {
        t if t.starts_with("switch") => "switching",
        t if t.starts_with("price") => "price sensitivity",
        t if t.starts_with("churn") => "churn",
        t if t.starts_with("cancel") => "cancellations",
        t if t.starts_with("defect") => "defection",
        t if t.starts_with("vulnerab") => "vulnerability",
        _ => "risk",
    }
}
