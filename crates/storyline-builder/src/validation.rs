//! Structural checks on a finished manifest.
//!
//! Renderers trust the manifest blindly, so anything read back from disk or
//! produced by a swapped-in heuristic can be checked here first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use storyline_core::constants::{MAX_SECTIONS, MAX_SECTION_KPIS, MAX_TOP_KPIS};
use storyline_core::models::{StoryKpi, StoryManifest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManifestViolation {
    #[error("manifest references unknown insight {id}")]
    UnknownInsightId { id: String },

    #[error("insight {id} is not assigned to any section")]
    UncoveredInsight { id: String },

    #[error("insight {id} is assigned to more than one section")]
    DuplicateAssignment { id: String },

    #[error("KPIs in {scope} are not sorted by descending score")]
    UnsortedKpis { scope: String },

    #[error("{scope} carries {count} KPIs, limit is {limit}")]
    TooManyKpis {
        scope: String,
        count: usize,
        limit: usize,
    },

    #[error("{count} sections exceed the limit of {limit}")]
    TooManySections { count: usize, limit: usize },

    #[error("manifest has no sections")]
    NoSections,

    #[error("{field} is {value}, expected a value in [0, 1]")]
    ScoreOutOfRange { field: String, value: f64 },

    #[error("section {section} has order {order}, expected {expected}")]
    SectionOrder {
        section: String,
        order: usize,
        expected: usize,
    },
}

/// Check `manifest` against the ids of the insights it was built from.
///
/// Returns every violation found; an empty list means the manifest is sound.
pub fn validate_manifest(manifest: &StoryManifest, input_ids: &[&str]) -> Vec<ManifestViolation> {
    let mut violations = Vec::new();

    for id in manifest.referenced_insight_ids() {
        if !input_ids.contains(&id) {
            violations.push(ManifestViolation::UnknownInsightId { id: id.to_string() });
        }
    }

    check_coverage(manifest, input_ids, &mut violations);

    if manifest.sections.is_empty() {
        violations.push(ManifestViolation::NoSections);
    } else if manifest.sections.len() > MAX_SECTIONS {
        violations.push(ManifestViolation::TooManySections {
            count: manifest.sections.len(),
            limit: MAX_SECTIONS,
        });
    }

    check_kpis("top_kpis", &manifest.top_kpis, MAX_TOP_KPIS, &mut violations);
    for (i, section) in manifest.sections.iter().enumerate() {
        check_kpis(&section.id, &section.kpis, MAX_SECTION_KPIS, &mut violations);
        if section.order != i + 1 {
            violations.push(ManifestViolation::SectionOrder {
                section: section.id.clone(),
                order: section.order,
                expected: i + 1,
            });
        }
    }

    check_unit("thesis.confidence", manifest.thesis.confidence.value(), &mut violations);

    violations
}

fn check_coverage(manifest: &StoryManifest, input_ids: &[&str], out: &mut Vec<ManifestViolation>) {
    let mut assigned: HashMap<&str, usize> = HashMap::new();
    for section in &manifest.sections {
        for id in &section.insight_ids {
            *assigned.entry(id.as_str()).or_default() += 1;
        }
    }

    for id in input_ids {
        match assigned.get(id) {
            None => out.push(ManifestViolation::UncoveredInsight { id: id.to_string() }),
            Some(&n) if n > 1 => out.push(ManifestViolation::DuplicateAssignment { id: id.to_string() }),
            Some(_) => {}
        }
    }
}

fn check_kpis(scope: &str, kpis: &[StoryKpi], limit: usize, out: &mut Vec<ManifestViolation>) {
    if kpis.len() > limit {
        out.push(ManifestViolation::TooManyKpis {
            scope: scope.to_string(),
            count: kpis.len(),
            limit,
        });
    }
    if kpis.windows(2).any(|w| w[0].score < w[1].score) {
        out.push(ManifestViolation::UnsortedKpis {
            scope: scope.to_string(),
        });
    }
    for kpi in kpis {
        check_unit(&format!("{scope}.{}.score", kpi.value), kpi.score, out);
    }
}

fn check_unit(field: &str, value: f64, out: &mut Vec<ManifestViolation>) {
    if !(0.0..=1.0).contains(&value) {
        out.push(ManifestViolation::ScoreOutOfRange {
            field: field.to_string(),
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoryBuilder;
    use storyline_core::models::{NarrativeMode, RawInsight};

    fn manifest() -> StoryManifest {
        let records = vec![
            RawInsight::new("rev", "Revenue grew 23% to $4.2M, driven by Region A", "trend", "key"),
            RawInsight::new(
                "churn",
                "Customer churn rose 8 pts in Region B vs Region A, up 14% year over year",
                "comparison",
                "key",
            ),
        ];
        StoryBuilder::new()
            .execute(&records, "demo", None, NarrativeMode::Executive)
            .unwrap()
    }

    #[test]
    fn built_manifest_is_sound() {
        assert_eq!(validate_manifest(&manifest(), &["rev", "churn"]), Vec::new());
    }

    #[test]
    fn missing_input_is_reported_both_ways() {
        let violations = validate_manifest(&manifest(), &["rev", "other"]);
        assert!(violations.contains(&ManifestViolation::UnknownInsightId { id: "churn".into() }));
        assert!(violations.contains(&ManifestViolation::UncoveredInsight { id: "other".into() }));
    }

    #[test]
    fn unsorted_and_out_of_range_kpis_are_reported() {
        let mut manifest = manifest();
        manifest.top_kpis.reverse();
        manifest.top_kpis[0].score = 1.5;
        let violations = validate_manifest(&manifest, &["rev", "churn"]);
        assert!(violations.contains(&ManifestViolation::UnsortedKpis {
            scope: "top_kpis".into()
        }));
        assert!(violations
            .iter()
            .any(|v| matches!(v, ManifestViolation::ScoreOutOfRange { .. })));
    }

    #[test]
    fn duplicated_assignment_and_order_gaps_are_reported() {
        let mut manifest = manifest();
        let mut copy = manifest.sections[0].clone();
        copy.id = "section-copy".into();
        copy.order = 7;
        manifest.sections.push(copy);
        let violations = validate_manifest(&manifest, &["rev", "churn"]);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ManifestViolation::DuplicateAssignment { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, ManifestViolation::SectionOrder { order: 7, .. })));
    }

    #[test]
    fn empty_sections_are_reported() {
        let mut manifest = manifest();
        manifest.sections.clear();
        let violations = validate_manifest(&manifest, &["rev", "churn"]);
        assert!(violations.contains(&ManifestViolation::NoSections));
        assert_eq!(
            violations
                .iter()
                .filter(|v| matches!(v, ManifestViolation::UncoveredInsight { .. }))
                .count(),
            2
        );
    }
}
