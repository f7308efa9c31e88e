//! Section grouping over the golden scenarios.

use storyline_core::config::{AdapterConfig, StoryConfig};
use storyline_core::constants::FALLBACK_SECTION_TITLE;
use storyline_core::errors::ExtractionWarning;
use storyline_core::models::{ChartKind, RawInsight};
use storyline_extraction::adapt_insights;
use storyline_sections::{group_sections, KeywordConceptExtractor};

fn retail() -> Vec<RawInsight> {
    let doc = test_fixtures::load_fixture_value("golden/retail_quarterly.json");
    serde_json::from_value(doc["insights"].clone()).unwrap()
}

#[test]
fn retail_sections_cover_every_adapted_insight() {
    let adapted = adapt_insights(&retail(), &AdapterConfig::default()).unwrap();
    let cfg = StoryConfig::default();
    let outcome = group_sections(&adapted.insights, &KeywordConceptExtractor::default(), &cfg);

    assert!(!outcome.sections.is_empty());
    assert!(outcome.sections.len() <= cfg.grouping.max_sections);

    let mut grouped: Vec<&str> = outcome
        .sections
        .iter()
        .flat_map(|s| s.insight_ids.iter().map(String::as_str))
        .collect();
    grouped.sort();
    let mut input: Vec<&str> = adapted.insights.iter().map(|i| i.id.as_str()).collect();
    input.sort();
    assert_eq!(grouped, input);

    for (i, section) in outcome.sections.iter().enumerate() {
        assert_eq!(section.order, i + 1);
        assert_eq!(section.charts.len(), section.insight_ids.len());
        assert!(section.kpis.len() <= 3);
        assert!(section.kpis.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(section.narrative.is_empty());
        assert!(!section.thesis.is_empty());
    }
}

#[test]
fn retail_trend_cluster_recommends_line_charts() {
    let adapted = adapt_insights(&retail(), &AdapterConfig::default()).unwrap();
    let outcome = group_sections(
        &adapted.insights,
        &KeywordConceptExtractor::default(),
        &StoryConfig::default(),
    );
    let chart_for = |id: &str| {
        outcome
            .sections
            .iter()
            .flat_map(|s| s.charts.iter())
            .find(|c| c.insight_id == id)
            .map(|c| c.chart.kind)
    };
    assert_eq!(chart_for("rq-1"), Some(ChartKind::Line));
    assert_eq!(chart_for("rq-8"), Some(ChartKind::Donut));
}

#[test]
fn tighter_section_cap_routes_overflow_to_fallback() {
    let adapted = adapt_insights(&retail(), &AdapterConfig::default()).unwrap();
    let mut cfg = StoryConfig::default();
    cfg.grouping.max_sections = 2;
    let outcome = group_sections(&adapted.insights, &KeywordConceptExtractor::default(), &cfg);

    assert!(outcome.sections.len() <= 2);
    assert!(outcome
        .warnings
        .iter()
        .any(|w| matches!(w, ExtractionWarning::FallbackSection { .. })));
}

#[test]
fn revenue_churn_titles_reflect_categories() {
    let records: Vec<RawInsight> = test_fixtures::load_fixture("golden/revenue_churn.json");
    let adapted = adapt_insights(&records, &AdapterConfig::default()).unwrap();
    let outcome = group_sections(
        &adapted.insights,
        &KeywordConceptExtractor::default(),
        &StoryConfig::default(),
    );
    assert!(outcome.sections.iter().any(|s| {
        let t = s.title.to_lowercase();
        t.contains("trend") || t.contains("comparison") || t.contains("key findings")
    }));
}

fn unrelated(count: usize) -> Vec<RawInsight> {
    [
        ("n1", "Warehouse throughput doubled", "trend"),
        ("n2", "Supplier invoices lagged", "comparison"),
        ("n3", "Marketing spend shifted online", "distribution"),
        ("n4", "Payment failures spiked overnight", "anomaly"),
        ("n5", "Hiring pipeline narrowed sharply", "correlation"),
    ]
    .into_iter()
    .take(count)
    .map(|(id, text, category)| RawInsight::new(id, text, category, "key"))
    .collect()
}

#[test]
fn small_corpus_threshold_ends_at_five_insights() {
    let cfg = StoryConfig::default();
    let extractor = KeywordConceptExtractor::default();

    // Four insights: a single occurrence seeds a section.
    let four = adapt_insights(&unrelated(4), &AdapterConfig::default()).unwrap();
    let outcome = group_sections(&four.insights, &extractor, &cfg);
    assert_eq!(outcome.sections.len(), 4);
    assert!(outcome.sections.iter().all(|s| s.insight_ids.len() == 1));
    assert!(outcome.sections.iter().all(|s| s.title != FALLBACK_SECTION_TITLE));
    assert!(!outcome
        .warnings
        .iter()
        .any(|w| matches!(w, ExtractionWarning::FallbackSection { .. })));

    // Five insights: concepts need two occurrences, none qualify.
    let five = adapt_insights(&unrelated(5), &AdapterConfig::default()).unwrap();
    let outcome = group_sections(&five.insights, &extractor, &cfg);
    assert_eq!(outcome.sections.len(), 1);
    assert_eq!(outcome.sections[0].title, FALLBACK_SECTION_TITLE);
    assert_eq!(outcome.sections[0].insight_ids, vec!["n1", "n2", "n3", "n4", "n5"]);
    assert!(outcome.warnings.contains(&ExtractionWarning::FallbackSection {
        section: FALLBACK_SECTION_TITLE.to_string(),
        count: 5,
    }));
}
