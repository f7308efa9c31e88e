//! Numeric token scanner.
//!
//! Finds the three value shapes KPIs are built from: percentages, deltas
//! (signed changes or point units) and large magnitudes (currency, K/M/B
//! suffixes, thousands separators, long integers). Matches never overlap;
//! deltas win over the other shapes on the same span.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use storyline_core::formatting::{abbreviate, format_currency, format_delta, format_percent};

/// Percentages and point deltas. The optional sign is validated in code
/// because the regex crate has no look-behind.
static PERCENT_OR_POINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<sign>[+\-−])?(?P<num>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*(?P<unit>%|percentage points?\b|percent\b|points?\b|pts?\b|pp\b|bps\b)",
    )
    .expect("valid percent regex")
});

static MAGNITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<cur>[$€£¥])?(?P<num>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)(?P<suffix>[KMBkmb]\b|bn\b|\s(?:thousand|million|billion)\b)?(?:\s(?P<unit>hours|hrs|days|weeks|months|years|minutes|mins|seconds|secs)\b)?",
    )
    .expect("valid magnitude regex")
});

/// Shape of a numeric match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericShape {
    Percentage,
    Delta,
    Magnitude,
}

/// One numeric token found in free text.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericMatch {
    /// Byte offsets into the scanned text.
    pub start: usize,
    pub end: usize,
    /// Parsed value with suffix multipliers applied.
    pub value: f64,
    pub shape: NumericShape,
    /// Rendered value, formatted once here.
    pub formatted: String,
    pub currency: Option<String>,
}

impl NumericMatch {
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

/// Scan `text` for percentages, deltas, and magnitudes, ordered by position.
///
/// Plain integers count as magnitudes once they reach `min_digits` digits,
/// except year-like values (1900 to 2100).
pub fn scan_numbers(text: &str, min_digits: usize) -> Vec<NumericMatch> {
    let mut matches: Vec<NumericMatch> = PERCENT_OR_POINTS
        .captures_iter(text)
        .filter_map(|caps| percent_or_points(text, &caps))
        .collect();

    for caps in MAGNITUDE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if matches.iter().any(|m| m.overlaps(whole.start(), whole.end())) {
            continue;
        }
        if let Some(m) = magnitude(&caps, min_digits) {
            matches.push(m);
        }
    }

    matches.sort_by_key(|m| m.start);
    matches
}

fn percent_or_points(text: &str, caps: &Captures<'_>) -> Option<NumericMatch> {
    let whole = caps.get(0)?;
    let number = caps.name("num")?;
    let magnitude = parse_number(number.as_str())?;
    let unit = normalize_point_unit(caps.name("unit")?.as_str());

    // A sign glued to a word ("Q3-5%") is a hyphen, not a sign.
    let sign = caps.name("sign").filter(|s| {
        text[..s.start()]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    });
    let start = if sign.is_some() {
        whole.start()
    } else {
        number.start()
    };
    let negative = sign.is_some_and(|s| s.as_str() != "+");
    let value = if negative { -magnitude } else { magnitude };

    let (shape, formatted) = if unit == "%" && sign.is_none() {
        (NumericShape::Percentage, format_percent(value))
    } else {
        (NumericShape::Delta, format_delta(value, unit, sign.is_some()))
    };

    Some(NumericMatch {
        start,
        end: whole.end(),
        value,
        shape,
        formatted,
        currency: None,
    })
}

fn magnitude(caps: &Captures<'_>, min_digits: usize) -> Option<NumericMatch> {
    let whole = caps.get(0)?;
    let raw = caps.name("num")?.as_str();
    let currency = caps.name("cur").map(|c| c.as_str().to_string());
    let suffix = caps.name("suffix").map(|s| s.as_str().trim().to_lowercase());
    let unit = caps.name("unit").map(|u| u.as_str());

    let base = parse_number(raw)?;
    let has_separator = raw.contains(',');
    let integer_digits = raw
        .split('.')
        .next()
        .map_or(0, |int| int.chars().filter(char::is_ascii_digit).count());
    let year_like =
        !has_separator && !raw.contains('.') && raw.len() == 4 && (1900.0..=2100.0).contains(&base);

    let qualifies = currency.is_some()
        || suffix.is_some()
        || has_separator
        || (integer_digits >= min_digits && !year_like);
    if !qualifies {
        return None;
    }

    let value = base * suffix.as_deref().map_or(1.0, multiplier);
    let mut formatted = match &currency {
        Some(symbol) => format_currency(value, symbol),
        None => abbreviate(value),
    };
    if let Some(unit) = unit {
        formatted.push(' ');
        formatted.push_str(unit);
    }

    Some(NumericMatch {
        start: whole.start(),
        end: whole.end(),
        value,
        shape: NumericShape::Magnitude,
        formatted,
        currency,
    })
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

fn multiplier(suffix: &str) -> f64 {
    match suffix {
        "k" | "thousand" => 1e3,
        "m" | "million" => 1e6,
        "b" | "bn" | "billion" => 1e9,
        _ => 1.0,
    }
}

fn normalize_point_unit(unit: &str) -> &'static str {
    match unit.to_lowercase().as_str() {
        "%" | "percent" => "%",
        "pp" => "pp",
        "bps" => "bps",
        _ => "pts",
    }
}
