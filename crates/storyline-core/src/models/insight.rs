use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Score;

/// An insight record as emitted by the upstream statistical engine.
///
/// Upstream producers disagree on field names, so the common spellings are
/// accepted as aliases. Everything is optional; the adapter decides what a
/// usable record is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInsight {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "description")]
    pub text: Option<String>,
    #[serde(default, alias = "title")]
    pub headline: Option<String>,
    #[serde(default, alias = "supporting_detail", alias = "details")]
    pub detail: Option<String>,
    #[serde(default, alias = "type", alias = "insight_type")]
    pub category: Option<String>,
    #[serde(default, alias = "tier", alias = "priority")]
    pub severity: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default, alias = "supporting_evidence")]
    pub evidence: BTreeMap<String, serde_json::Value>,
}

impl RawInsight {
    /// Convenience constructor used by tests and embedders.
    pub fn new(id: &str, text: &str, category: &str, severity: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            text: Some(text.to_string()),
            category: Some(category.to_string()),
            severity: Some(severity.to_string()),
            ..Default::default()
        }
    }
}

/// A normalized insight, the unit every extraction stage works on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    /// Headline and supporting detail combined.
    pub text: String,
    /// Lowercased category label.
    pub category: String,
    pub confidence: Score,
    pub business_value: Score,
    pub actionability: Score,
    #[serde(default)]
    pub evidence: BTreeMap<String, f64>,
}

impl Insight {
    pub fn kind(&self) -> InsightCategory {
        InsightCategory::from_label(&self.category)
    }
}

/// The category labels the pipeline knows how to treat specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightCategory {
    Trend,
    Comparison,
    Anomaly,
    Distribution,
    Correlation,
    Other,
}

impl InsightCategory {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "trend" | "trends" | "time_series" | "timeseries" => Self::Trend,
            "comparison" | "compare" | "benchmark" => Self::Comparison,
            "anomaly" | "anomalies" | "outlier" | "outliers" => Self::Anomaly,
            "distribution" | "composition" => Self::Distribution,
            "correlation" | "relationship" | "driver" => Self::Correlation,
            _ => Self::Other,
        }
    }

    /// True for categories whose high-confidence findings count as surprises.
    pub fn is_surprising(self) -> bool {
        matches!(self, Self::Anomaly | Self::Correlation)
    }
}

/// A record the adapter dropped, kept so no insight disappears silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Position of the record in the upstream collection.
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}
