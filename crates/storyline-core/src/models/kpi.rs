use serde::{Deserialize, Serialize};

/// Shape of a KPI callout, used as the dominant ranking signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiKind {
    Headline,
    Supporting,
    Delta,
    Count,
}

impl KpiKind {
    /// Ranking weight of the kind.
    pub fn weight(self) -> f64 {
        match self {
            Self::Headline => 1.0,
            Self::Delta => 0.9,
            Self::Supporting => 0.8,
            Self::Count => 0.7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Supporting => "supporting",
            Self::Delta => "delta",
            Self::Count => "count",
        }
    }
}

/// What a formatted value measures. Drives vocabulary in the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSemantics {
    Currency,
    Percentage,
    Duration,
    Count,
}

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];
const POINT_UNITS: &[&str] = &["pts", "pt", "pp", "bps"];
const DURATION_UNITS: &[&str] = &[
    "seconds", "secs", "minutes", "mins", "hours", "hrs", "days", "weeks", "months", "years",
    "yrs",
];

impl ValueSemantics {
    /// Classify a formatted KPI value string.
    pub fn detect(formatted: &str) -> Self {
        let lower = formatted.to_lowercase();
        if lower.contains(CURRENCY_SYMBOLS) {
            return Self::Currency;
        }
        if lower.contains('%') {
            return Self::Percentage;
        }
        let has_unit = |units: &[&str]| {
            lower
                .split_whitespace()
                .any(|token| units.contains(&token))
        };
        if has_unit(POINT_UNITS) {
            Self::Percentage
        } else if has_unit(DURATION_UNITS) {
            Self::Duration
        } else {
            Self::Count
        }
    }
}

/// A ranked numeric callout mined from insight text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryKpi {
    /// Formatted value, rendered once and never re-derived.
    pub value: String,
    pub label: String,
    pub context: String,
    pub kind: KpiKind,
    /// 1-based position in its list.
    pub rank: usize,
    pub source_insight_id: Option<String>,
    /// Rank score the list is sorted by (descending).
    pub score: f64,
    pub semantics: ValueSemantics,
}
