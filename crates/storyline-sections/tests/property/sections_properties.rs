//! Property tests for storyline-sections: coverage, non-emptiness, ordering.

use proptest::prelude::*;

use storyline_core::config::StoryConfig;
use storyline_core::models::{Insight, Score};
use storyline_sections::{group_sections, KeywordConceptExtractor};

const WORDS: &[&str] = &[
    "revenue", "churn", "basket", "region", "online", "store", "returns", "footwear", "margin",
    "orders", "loyalty", "support",
];
const CATEGORIES: &[&str] = &["trend", "comparison", "anomaly", "distribution", "correlation"];

fn insight_strategy() -> impl Strategy<Value = (Vec<usize>, usize, f64, u32)> {
    (
        proptest::collection::vec(0..WORDS.len(), 1..5),
        0..CATEGORIES.len(),
        0.0f64..=1.0,
        1u32..99,
    )
}

fn build(raw: Vec<(Vec<usize>, usize, f64, u32)>) -> Vec<Insight> {
    raw.into_iter()
        .enumerate()
        .map(|(i, (words, cat, bv, pct))| {
            let text = words.iter().map(|w| WORDS[*w]).collect::<Vec<_>>().join(" ");
            Insight {
                id: format!("p-{i}"),
                text: format!("{text} moved {pct}%"),
                category: CATEGORIES[cat].to_string(),
                confidence: Score::new(0.7),
                business_value: Score::new(bv),
                actionability: Score::new(0.8),
                evidence: Default::default(),
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_every_insight_in_exactly_one_section(raw in proptest::collection::vec(insight_strategy(), 1..20)) {
        let insights = build(raw);
        let cfg = StoryConfig::default();
        let outcome = group_sections(&insights, &KeywordConceptExtractor::default(), &cfg);

        prop_assert!(!outcome.sections.is_empty());
        prop_assert!(outcome.sections.len() <= cfg.grouping.max_sections);

        let mut grouped: Vec<String> = outcome.sections.iter().flat_map(|s| s.insight_ids.clone()).collect();
        grouped.sort();
        let mut input: Vec<String> = insights.iter().map(|i| i.id.clone()).collect();
        input.sort();
        prop_assert_eq!(grouped, input);
    }

    #[test]
    fn prop_sections_sorted_by_mean_value(raw in proptest::collection::vec(insight_strategy(), 1..20)) {
        let insights = build(raw);
        let outcome = group_sections(&insights, &KeywordConceptExtractor::default(), &StoryConfig::default());
        let means: Vec<f64> = outcome.sections.iter().map(|s| {
            let total: f64 = s.insight_ids.iter()
                .map(|id| insights.iter().find(|i| &i.id == id).unwrap().business_value.value())
                .sum();
            total / s.insight_ids.len() as f64
        }).collect();
        prop_assert!(means.windows(2).all(|w| w[0] >= w[1] - 1e-12));
    }

    #[test]
    fn prop_grouping_deterministic(raw in proptest::collection::vec(insight_strategy(), 1..20)) {
        let insights = build(raw);
        let extractor = KeywordConceptExtractor::default();
        let cfg = StoryConfig::default();
        prop_assert_eq!(
            group_sections(&insights, &extractor, &cfg),
            group_sections(&insights, &extractor, &cfg)
        );
    }
}
