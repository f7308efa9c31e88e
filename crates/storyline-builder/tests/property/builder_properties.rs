//! Property tests for whole-pipeline builds.

use proptest::prelude::*;

use storyline_builder::{validate_manifest, StoryBuilder};
use storyline_core::models::{NarrativeMode, RawInsight};

const SUBJECTS: [&str; 5] = ["Revenue", "Churn", "Basket size", "Returns", "Backlog"];
const CATEGORIES: [&str; 6] = ["trend", "comparison", "anomaly", "distribution", "correlation", "general"];
const SEVERITIES: [&str; 4] = ["critical", "key", "supporting", "minor"];

fn record_strategy() -> impl Strategy<Value = RawInsight> {
    (
        0..SUBJECTS.len(),
        1u32..95,
        0..CATEGORIES.len(),
        0..SEVERITIES.len(),
        proptest::bool::ANY,
    )
        .prop_map(|(subject, pct, category, severity, with_amount)| {
            let text = if with_amount {
                format!("{} moved {pct}% to ${pct}.5M in the north", SUBJECTS[subject])
            } else {
                format!("{} moved {pct}% in the north", SUBJECTS[subject])
            };
            RawInsight {
                text: Some(text),
                category: Some(CATEGORIES[category].to_string()),
                severity: Some(SEVERITIES[severity].to_string()),
                ..Default::default()
            }
        })
}

proptest! {
    #[test]
    fn prop_every_build_is_valid(records in prop::collection::vec(record_strategy(), 1..12)) {
        let manifest = StoryBuilder::new()
            .execute(&records, "prop", None, NarrativeMode::Executive)
            .unwrap();
        let ids: Vec<String> = (1..=records.len()).map(|n| format!("insight-{n}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        prop_assert_eq!(validate_manifest(&manifest, &id_refs), Vec::new());
        prop_assert!(!manifest.sections.is_empty());
    }

    #[test]
    fn prop_modes_share_structure(records in prop::collection::vec(record_strategy(), 1..8)) {
        let manifests = StoryBuilder::new()
            .execute_all_modes(&records, "prop", None)
            .unwrap();
        for pair in manifests.windows(2) {
            prop_assert_eq!(&pair[0].thesis, &pair[1].thesis);
            prop_assert_eq!(&pair[0].top_kpis, &pair[1].top_kpis);
            let ids = |m: &storyline_core::StoryManifest| -> Vec<Vec<String>> {
                m.sections.iter().map(|s| s.insight_ids.clone()).collect()
            };
            prop_assert_eq!(ids(&pair[0]), ids(&pair[1]));
        }
    }
}
