//! Language signals the selector matches on.

use std::sync::LazyLock;

use regex::Regex;

static TEMPORAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(q[1-4]|h[12]|fy\s?\d{2,4}|(?:19|20)\d{2}|\d{4}-\d{2}-\d{2}|january|february|march|april|june|july|august|september|october|november|december|jan|feb|apr|jun|jul|aug|sep|sept|oct|nov|dec|yoy|mom|qoq|wow|year[- ]over[- ]year|month[- ]over[- ]month|quarter[- ]over[- ]quarter|week[- ]over[- ]week|quarterly|monthly|weekly|daily|annually|over time)\b",
    )
    .expect("valid temporal regex")
});

static PART_TO_WHOLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bshare\b|\bof total\b|\bproportion\b|\bbreakdown\b|\bcomposition\b|\bmix\b|\bmakes up\b|\baccounts? for\b|\bsplit between\b)",
    )
    .expect("valid part-to-whole regex")
});

static OF_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bof (?:the )?total\b").expect("valid of-total regex"));

static COMPARISON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(higher|lower|vs\.?|versus|compared|than|outperform\w*|underperform\w*|ahead of|behind|gap between)\b",
    )
    .expect("valid comparison regex")
});

static FLOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\bfrom\b.+?\bto\b|\btransition\w*|\bfunnel\b|\bmigrat\w*|\bjourney\b|\bconverted into\b)")
        .expect("valid flow regex")
});

static OUTLIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(outliers?|anomal\w*|spike[sd]?|spiking|unusual|unexpected|deviat\w*|abnormal|irregular)\b")
        .expect("valid outlier regex")
});

static GEOGRAPHIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(regions?|regional|country|countries|states|city|cities|province|territor(?:y|ies)|emea|apac|latam|europe|asia|americas?|geograph\w*)\b",
    )
    .expect("valid geographic regex")
});

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?%?").expect("valid numeric regex"));

/// Evidence keys that hold a coefficient rather than a measured field.
const COEFFICIENT_KEYS: &[&str] = &["r", "rho", "r2", "correlation", "coefficient", "p", "p_value", "tau"];

pub fn is_temporal(text: &str) -> bool {
    TEMPORAL.is_match(text)
}

pub fn is_part_to_whole(text: &str) -> bool {
    PART_TO_WHOLE.is_match(text)
}

pub fn mentions_of_total(text: &str) -> bool {
    OF_TOTAL.is_match(text)
}

pub fn is_comparison(text: &str) -> bool {
    COMPARISON.is_match(text)
}

pub fn is_flow(text: &str) -> bool {
    FLOW.is_match(text)
}

pub fn is_outlier(text: &str) -> bool {
    OUTLIER.is_match(text)
}

pub fn is_geographic(text: &str) -> bool {
    GEOGRAPHIC.is_match(text)
}

pub fn is_coefficient_key(key: &str) -> bool {
    COEFFICIENT_KEYS.contains(&key.to_lowercase().as_str())
}

/// Distinct numeric tokens in `text`, used when evidence gives no count.
pub fn numeric_token_count(text: &str) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for m in NUMERIC_TOKEN.find_iter(text) {
        if !seen.contains(&m.as_str()) {
            seen.push(m.as_str());
        }
    }
    seen.len()
}
