//! Section grouper: concept bags → clusters → enriched, ordered sections.

use storyline_charts::select_for_insight;
use storyline_core::config::StoryConfig;
use storyline_core::constants::{ADDITIONAL_SECTION_TITLE, FALLBACK_SECTION_TITLE};
use storyline_core::errors::ExtractionWarning;
use storyline_core::models::{Insight, Score, StorySection};
use storyline_core::text::{as_sentence, first_sentence, join_natural, title_case};
use storyline_core::traits::IConceptExtractor;
use storyline_extraction::kpi::extract_kpis;
use tracing::{debug, info};

use crate::clustering::cluster_bags;
use crate::titles::{render_title, title_words};

/// Below this many insights nothing is clustered; everything lands in the
/// fallback section.
const MIN_CLUSTER_CORPUS: usize = 2;

/// Sections in display order plus the recoverable problems met on the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupingOutcome {
    pub sections: Vec<StorySection>,
    pub warnings: Vec<ExtractionWarning>,
}

/// A section before enrichment.
struct Draft {
    title: String,
    members: Vec<usize>,
}

/// Partition `insights` into titled sections.
///
/// Every insight lands in exactly one section; a non-empty input always
/// yields at least one. Section narratives are left empty for the
/// synthesizer.
pub fn group_sections(
    insights: &[Insight],
    extractor: &dyn IConceptExtractor,
    cfg: &StoryConfig,
) -> GroupingOutcome {
    if insights.is_empty() {
        return GroupingOutcome::default();
    }

    let texts: Vec<&str> = insights.iter().map(|i| i.text.as_str()).collect();
    let categories: Vec<&str> = insights.iter().map(|i| i.category.as_str()).collect();
    let bags = concept_bags(extractor, &texts, &categories);

    let threshold = cfg.grouping.occurrence_threshold(insights.len());
    let mut result = if insights.len() >= MIN_CLUSTER_CORPUS {
        cluster_bags(&bags, &categories, threshold, cfg.grouping.max_sections)
    } else {
        crate::clustering::ClusterResult {
            unassigned: (0..insights.len()).collect(),
            ..Default::default()
        }
    };

    let mut drafts: Vec<Draft> = result
        .clusters
        .iter()
        .map(|cluster| {
            let member_bags: Vec<&[String]> = cluster.members.iter().map(|&i| bags[i].as_slice()).collect();
            let words = title_words(&cluster.seed, &member_bags, cfg.grouping.max_title_words);
            Draft {
                title: render_title(&words),
                members: cluster.members.clone(),
            }
        })
        .collect();

    if !result.unassigned.is_empty() {
        let title = if drafts.is_empty() {
            FALLBACK_SECTION_TITLE
        } else {
            ADDITIONAL_SECTION_TITLE
        };
        result.warnings.push(ExtractionWarning::FallbackSection {
            section: title.to_string(),
            count: result.unassigned.len(),
        });
        drafts.push(Draft {
            title: title.to_string(),
            members: std::mem::take(&mut result.unassigned),
        });
    }

    // Stable: equal means keep cluster order, fallback last.
    drafts.sort_by(|a, b| mean_value(insights, &b.members).total_cmp(&mean_value(insights, &a.members)));

    let sections: Vec<StorySection> = drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| build_section(insights, draft, i + 1, cfg))
        .collect();

    info!(
        sections = sections.len(),
        threshold,
        extractor = extractor.name(),
        warnings = result.warnings.len(),
        "grouped insights into sections"
    );

    GroupingOutcome {
        sections,
        warnings: result.warnings,
    }
}

/// Concept bags with each insight's category label added.
fn concept_bags(extractor: &dyn IConceptExtractor, texts: &[&str], categories: &[&str]) -> Vec<Vec<String>> {
    let mut bags = extractor.concept_bags(texts);
    if bags.len() != texts.len() {
        debug!(
            expected = texts.len(),
            got = bags.len(),
            "concept extractor returned a mismatched bag count"
        );
        bags.resize_with(texts.len(), Vec::new);
    }
    for (bag, category) in bags.iter_mut().zip(categories) {
        let label = category.to_string();
        if !label.is_empty() && !bag.contains(&label) {
            bag.push(label);
        }
    }
    bags
}

fn mean_value(insights: &[Insight], members: &[usize]) -> f64 {
    Score::mean(members.iter().map(|&i| insights[i].business_value)).value()
}

fn build_section(insights: &[Insight], draft: Draft, order: usize, cfg: &StoryConfig) -> StorySection {
    let members: Vec<&Insight> = draft.members.iter().map(|&i| &insights[i]).collect();

    // Highest business value, earliest on ties.
    let lead = members.iter().copied().fold(None, |best: Option<&Insight>, cur| match best {
        Some(b) if b.business_value >= cur.business_value => Some(b),
        _ => Some(cur),
    });
    let thesis = lead
        .map(|i| as_sentence(first_sentence(&i.text)))
        .unwrap_or_default();

    StorySection {
        id: format!("section-{order}"),
        subtitle: subtitle(&draft.title, &members),
        title: draft.title,
        thesis,
        kpis: extract_kpis(members.iter().copied(), cfg.kpi.section_limit, &cfg.kpi),
        charts: members.iter().map(|i| select_for_insight(i, &cfg.charts)).collect(),
        insight_ids: members.iter().map(|i| i.id.clone()).collect(),
        narrative: String::new(),
        order,
    }
}

/// Member categories, unless the title already says the only one.
fn subtitle(title: &str, members: &[&Insight]) -> Option<String> {
    let mut categories: Vec<String> = Vec::new();
    for insight in members {
        let label = title_case(&insight.category.replace('_', " "));
        if !label.is_empty() && !categories.contains(&label) {
            categories.push(label);
        }
    }
    match categories.as_slice() {
        [] => None,
        [only] if title.to_lowercase().contains(&only.to_lowercase()) => None,
        _ => {
            let refs: Vec<&str> = categories.iter().map(String::as_str).collect();
            Some(format!("{} insights", join_natural(&refs)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordConceptExtractor;

    fn insight(id: &str, text: &str, category: &str, bv: f64) -> Insight {
        Insight {
            id: id.into(),
            text: text.into(),
            category: category.into(),
            confidence: Score::new(0.7),
            business_value: Score::new(bv),
            actionability: Score::new(0.8),
            evidence: Default::default(),
        }
    }

    fn group(insights: &[Insight]) -> GroupingOutcome {
        group_sections(insights, &KeywordConceptExtractor::default(), &StoryConfig::default())
    }

    #[test]
    fn revenue_churn_gets_category_sections() {
        let insights = vec![
            insight("a", "Revenue grew 23% to $4.2M, driven by Region A", "trend", 0.9),
            insight("b", "Customer churn rose 8 pts to 14%", "comparison", 1.0),
        ];
        let outcome = group(&insights);
        let titles: Vec<&str> = outcome.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Comparison Highlights", "Trend Highlights"]);
        assert_eq!(outcome.sections[0].order, 1);
        assert_eq!(outcome.sections[0].id, "section-1");
        assert_eq!(outcome.sections[0].insight_ids, vec!["b"]);
        assert!(outcome.sections[0].subtitle.is_none());
    }

    #[test]
    fn single_insight_is_one_fallback_section() {
        let insights = vec![insight("only", "Revenue grew 23%", "trend", 0.9)];
        let outcome = group(&insights);
        assert_eq!(outcome.sections.len(), 1);
        let section = &outcome.sections[0];
        assert_eq!(section.title, FALLBACK_SECTION_TITLE);
        assert_eq!(section.subtitle.as_deref(), Some("Trend insights"));
        assert_eq!(section.thesis, "Revenue grew 23%.");
        assert_eq!(section.kpis.len(), 1);
        assert_eq!(section.charts.len(), 1);
        assert!(matches!(
            outcome.warnings.as_slice(),
            [ExtractionWarning::FallbackSection { count: 1, .. }]
        ));
    }

    #[test]
    fn sections_ordered_by_mean_business_value() {
        let insights = vec![
            insight("a", "Online revenue rose", "trend", 0.5),
            insight("b", "Store revenue fell", "trend", 0.5),
            insight("c", "North basket size higher", "comparison", 1.0),
            insight("d", "South basket size lower", "comparison", 0.9),
            insight("e", "Footwear returns spiked", "anomaly", 0.7),
        ];
        let outcome = group(&insights);
        let means: Vec<f64> = outcome
            .sections
            .iter()
            .map(|s| {
                let bvs: Vec<f64> = s
                    .insight_ids
                    .iter()
                    .map(|id| insights.iter().find(|i| &i.id == id).unwrap().business_value.value())
                    .collect();
                bvs.iter().sum::<f64>() / bvs.len() as f64
            })
            .collect();
        assert!(means.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(outcome.sections.len(), 3);
        assert!(outcome.sections.iter().any(|s| s.title == ADDITIONAL_SECTION_TITLE));
        assert_eq!(outcome.sections[2].title, "Trend & Revenue");
    }

    #[test]
    fn every_insight_lands_once() {
        let insights: Vec<Insight> = (0..9)
            .map(|i| insight(&format!("i{i}"), &format!("Metric number{i} moved"), "trend", 0.5))
            .collect();
        let outcome = group(&insights);
        let mut ids: Vec<&str> = outcome
            .sections
            .iter()
            .flat_map(|s| s.insight_ids.iter().map(String::as_str))
            .collect();
        ids.sort();
        let mut expected: Vec<&str> = insights.iter().map(|i| i.id.as_str()).collect();
        expected.sort();
        assert_eq!(ids, expected);
        assert!(outcome.sections.len() <= StoryConfig::default().grouping.max_sections);
    }

    #[test]
    fn section_kpis_capped_at_three() {
        let insights = vec![
            insight("a", "Shares were 10%, 20%, 30%, 40% and 50%", "distribution", 0.9),
            insight("b", "Mix held at 12% and 14%", "distribution", 0.9),
        ];
        let outcome = group(&insights);
        assert!(outcome.sections.iter().all(|s| s.kpis.len() <= 3));
    }
}
