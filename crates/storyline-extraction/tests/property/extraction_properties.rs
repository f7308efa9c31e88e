//! Property tests for storyline-extraction: KPI ordering, idempotence,
//! thesis determinism, adapter score ranges.

use proptest::prelude::*;

use storyline_core::config::{AdapterConfig, KpiConfig, ThesisConfig};
use storyline_core::models::{RawInsight, ThesisFrame};

use storyline_extraction::{adapt_insights, extract_kpis, extract_thesis, KeywordParadoxDetector};

const CATEGORIES: &[&str] = &["trend", "comparison", "anomaly", "distribution", "correlation", "segment"];
const SEVERITIES: &[&str] = &["critical", "key", "major", "supporting", "minor"];
const PHRASES: &[&str] = &[
    "Revenue grew {n}% to ${m}M",
    "Customer churn rose {n} pts to {p}%",
    "Orders reached {m},250 across regions",
    "Satisfaction is high at {n}%",
    "{p}% of buyers are at risk of switching",
    "Support tickets held steady",
    "Margin slipped -{n}% quarter over quarter",
];

fn raw_insight() -> impl Strategy<Value = RawInsight> {
    (
        0..PHRASES.len(),
        0..CATEGORIES.len(),
        0..SEVERITIES.len(),
        1u32..99,
        1u32..999,
        1u32..99,
        proptest::option::of(0.0f64..1.5),
    )
        .prop_map(|(phrase, cat, sev, n, m, p, confidence)| RawInsight {
            text: Some(
                PHRASES[phrase]
                    .replace("{n}", &n.to_string())
                    .replace("{m}", &m.to_string())
                    .replace("{p}", &p.to_string()),
            ),
            category: Some(CATEGORIES[cat].to_string()),
            severity: Some(SEVERITIES[sev].to_string()),
            confidence,
            ..Default::default()
        })
}

fn corpus() -> impl Strategy<Value = Vec<RawInsight>> {
    proptest::collection::vec(raw_insight(), 1..12)
}

proptest! {
    #[test]
    fn prop_kpis_sorted_and_capped(records in corpus()) {
        let adapted = adapt_insights(&records, &AdapterConfig::default()).unwrap();
        let kpis = extract_kpis(&adapted.insights, 5, &KpiConfig::default());

        prop_assert!(kpis.len() <= 5);
        prop_assert!(kpis.windows(2).all(|w| w[0].score >= w[1].score));
        for (i, kpi) in kpis.iter().enumerate() {
            prop_assert_eq!(kpi.rank, i + 1);
        }
    }

    #[test]
    fn prop_kpi_extraction_idempotent(records in corpus()) {
        let adapted = adapt_insights(&records, &AdapterConfig::default()).unwrap();
        let first = extract_kpis(&adapted.insights, 5, &KpiConfig::default());
        let second = extract_kpis(&adapted.insights, 5, &KpiConfig::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_kpi_sources_exist(records in corpus()) {
        let adapted = adapt_insights(&records, &AdapterConfig::default()).unwrap();
        let kpis = extract_kpis(&adapted.insights, 5, &KpiConfig::default());
        for kpi in &kpis {
            let source = kpi.source_insight_id.as_deref().unwrap();
            prop_assert!(adapted.insights.iter().any(|i| i.id == source));
        }
    }

    #[test]
    fn prop_thesis_deterministic(records in corpus()) {
        let adapted = adapt_insights(&records, &AdapterConfig::default()).unwrap();
        let detector = KeywordParadoxDetector::new();
        let cfg = ThesisConfig::default();
        let a = extract_thesis(&adapted.insights, &detector, &cfg);
        let b = extract_thesis(&adapted.insights, &detector, &cfg);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.confidence.value() <= cfg.confidence_cap);
        prop_assert!(!a.supporting_insight_ids.is_empty());
        prop_assert!(a.supporting_insight_ids.len() <= cfg.max_supporting_insights);
        if a.frame == ThesisFrame::Paradox {
            prop_assert_eq!(a.supporting_insight_ids.len(), 2);
            prop_assert_ne!(&a.supporting_insight_ids[0], &a.supporting_insight_ids[1]);
        }
    }

    #[test]
    fn prop_adapter_scores_in_unit_interval(records in corpus()) {
        let adapted = adapt_insights(&records, &AdapterConfig::default()).unwrap();
        prop_assert_eq!(adapted.insights.len(), records.len());
        for insight in &adapted.insights {
            for score in [insight.confidence, insight.business_value, insight.actionability] {
                prop_assert!((0.0..=1.0).contains(&score.value()));
            }
        }
    }
}
