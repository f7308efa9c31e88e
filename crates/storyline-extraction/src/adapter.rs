//! Insight adapter: upstream records → normalized `Insight`s.
//!
//! business_value comes from the severity tier, actionability from the
//! category. Records without text are skipped and logged, never fatal on
//! their own.

use std::collections::{BTreeMap, HashSet};

use storyline_core::config::AdapterConfig;
use storyline_core::errors::{AdapterError, ExtractionWarning};
use storyline_core::models::{Insight, RawInsight, Score, SkippedRecord};
use tracing::{debug, info, warn};

/// Category used when a record has none.
pub const DEFAULT_CATEGORY: &str = "general";

/// Output of the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedInsights {
    pub insights: Vec<Insight>,
    pub skipped: Vec<SkippedRecord>,
    /// One `InsightIdAssigned` per record whose id had to be generated.
    pub warnings: Vec<ExtractionWarning>,
    /// Records received, skipped ones included.
    pub source_count: usize,
}

/// business_value for a severity tier.
pub fn business_value_for(severity: Option<&str>) -> f64 {
    match severity.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("critical") => 1.0,
        Some("key") | Some("major") => 0.9,
        Some("supporting") => 0.7,
        _ => 0.5,
    }
}

/// actionability for a category label.
pub fn actionability_for(category: &str) -> f64 {
    match category.trim().to_lowercase().as_str() {
        "anomaly" => 0.95,
        "comparison" => 0.90,
        "trend" => 0.80,
        "distribution" => 0.70,
        _ => 0.60,
    }
}

/// Adapt upstream records.
///
/// Fails only when the collection is empty or every record lacks text.
pub fn adapt_insights(
    records: &[RawInsight],
    cfg: &AdapterConfig,
) -> Result<AdaptedInsights, AdapterError> {
    if records.is_empty() {
        return Err(AdapterError::EmptyInput);
    }

    let mut insights = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    let mut warnings = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, raw) in records.iter().enumerate() {
        let Some(text) = combined_text(raw) else {
            debug!(index, id = ?raw.id, "skipping insight record without text");
            skipped.push(SkippedRecord {
                index,
                id: raw.id.clone(),
                reason: "record has no text".to_string(),
            });
            continue;
        };

        let id = unique_id(raw.id.as_deref(), index, &mut seen_ids);
        let original = raw.id.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if original != Some(id.as_str()) {
            warnings.push(ExtractionWarning::InsightIdAssigned {
                index,
                original: original.map(str::to_string),
                assigned: id.clone(),
            });
        }
        let category = raw
            .category
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        insights.push(Insight {
            id,
            text,
            confidence: Score::new(raw.confidence.unwrap_or(cfg.default_confidence)),
            business_value: Score::new(business_value_for(raw.severity.as_deref())),
            actionability: Score::new(actionability_for(&category)),
            category,
            evidence: numeric_evidence(&raw.evidence),
        });
    }

    if insights.is_empty() {
        return Err(AdapterError::NoTextualRecords {
            total: records.len(),
        });
    }

    info!(
        adapted = insights.len(),
        skipped = skipped.len(),
        "adapted insight records"
    );

    Ok(AdaptedInsights {
        insights,
        skipped,
        warnings,
        source_count: records.len(),
    })
}

/// `text` when present, else headline and detail joined.
fn combined_text(raw: &RawInsight) -> Option<String> {
    let clean = |s: &Option<String>| {
        s.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    if let Some(text) = clean(&raw.text) {
        return Some(text);
    }
    match (clean(&raw.headline), clean(&raw.detail)) {
        (Some(headline), Some(detail)) => Some(format!(
            "{} {}",
            storyline_core::text::as_sentence(&headline),
            detail
        )),
        (Some(one), None) | (None, Some(one)) => Some(one),
        (None, None) => None,
    }
}

/// Upstream ids are supposed to be unique; repeated or missing ones get a
/// positional id so manifest references stay unambiguous.
fn unique_id(raw_id: Option<&str>, index: usize, seen: &mut HashSet<String>) -> String {
    let base = raw_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("insight-{}", index + 1));

    if seen.insert(base.clone()) {
        return base;
    }
    let renamed = format!("{}#{}", base, index + 1);
    warn!(original = %base, renamed = %renamed, "duplicate insight id renamed");
    seen.insert(renamed.clone());
    renamed
}

/// Keep numeric evidence; numeric strings are parsed, everything else dropped.
fn numeric_evidence(raw: &BTreeMap<String, serde_json::Value>) -> BTreeMap<String, f64> {
    raw.iter()
        .filter_map(|(key, value)| {
            let number = match value {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }?;
            number.is_finite().then(|| (key.clone(), number))
        })
        .collect()
}
