//! First-match-wins chart selection.
//!
//! Rules, in order: temporal, part-to-whole, comparison, flow, correlated
//! evidence, outlier, geographic, then a plain bar.

use std::collections::BTreeMap;

use storyline_core::config::ChartConfig;
use storyline_core::models::{ChartKind, ChartReference, ChartSpec, EmphasisHint, Insight, InsightCategory};

use crate::params::{spec, spec_with};
use crate::signals;

/// What the selector looks at.
#[derive(Debug, Clone, Copy)]
pub struct ChartInput<'a> {
    pub text: &'a str,
    pub category: &'a str,
    pub evidence: &'a BTreeMap<String, f64>,
}

impl<'a> ChartInput<'a> {
    pub fn from_insight(insight: &'a Insight) -> Self {
        Self {
            text: &insight.text,
            category: &insight.category,
            evidence: &insight.evidence,
        }
    }

    /// Categories to plot: evidence entries, else distinct numbers in the text.
    pub fn category_count(&self) -> usize {
        if self.evidence.is_empty() {
            signals::numeric_token_count(self.text)
        } else {
            self.evidence.len()
        }
    }

    fn longest_label(&self) -> usize {
        self.evidence
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Measured evidence fields, when the evidence describes a relationship.
    fn correlated_fields(&self) -> usize {
        let has_coefficient = self.evidence.keys().any(|k| signals::is_coefficient_key(k));
        let is_correlation = InsightCategory::from_label(self.category) == InsightCategory::Correlation;
        if !has_coefficient && !is_correlation {
            return 0;
        }
        self.evidence
            .keys()
            .filter(|k| !signals::is_coefficient_key(k))
            .count()
    }
}

type Rule = fn(&ChartInput<'_>, &ChartConfig) -> Option<ChartSpec>;

const RULES: &[Rule] = &[
    temporal,
    part_to_whole,
    comparison,
    flow,
    correlation,
    outlier,
    geographic,
];

/// Recommend a chart for one insight.
pub fn select_chart(input: &ChartInput<'_>, cfg: &ChartConfig) -> ChartSpec {
    RULES
        .iter()
        .find_map(|rule| rule(input, cfg))
        .unwrap_or_else(|| spec(ChartKind::Bar, input.category_count()))
}

/// [`select_chart`] bound to the insight id.
pub fn select_for_insight(insight: &Insight, cfg: &ChartConfig) -> ChartReference {
    ChartReference {
        insight_id: insight.id.clone(),
        chart: select_chart(&ChartInput::from_insight(insight), cfg),
    }
}

fn temporal(input: &ChartInput<'_>, _cfg: &ChartConfig) -> Option<ChartSpec> {
    if !signals::is_temporal(input.text) {
        return None;
    }
    let kind = if signals::is_part_to_whole(input.text) {
        ChartKind::Area
    } else {
        ChartKind::Line
    };
    Some(spec(kind, input.category_count()))
}

fn part_to_whole(input: &ChartInput<'_>, cfg: &ChartConfig) -> Option<ChartSpec> {
    if !signals::is_part_to_whole(input.text) {
        return None;
    }
    let count = input.category_count();
    let kind = if (cfg.pie_min_categories..=cfg.pie_max_categories).contains(&count) {
        if signals::mentions_of_total(input.text) {
            ChartKind::Donut
        } else {
            ChartKind::Pie
        }
    } else if count > cfg.horizontal_category_limit {
        ChartKind::HorizontalBar
    } else {
        ChartKind::GroupedBar
    };
    Some(spec(kind, count))
}

fn comparison(input: &ChartInput<'_>, cfg: &ChartConfig) -> Option<ChartSpec> {
    if !signals::is_comparison(input.text) {
        return None;
    }
    let count = input.category_count();
    if count > cfg.horizontal_category_limit || input.longest_label() > cfg.horizontal_label_len {
        Some(spec(ChartKind::HorizontalBar, count))
    } else {
        Some(spec_with(ChartKind::Bar, count, EmphasisHint::SortDescending))
    }
}

fn flow(input: &ChartInput<'_>, _cfg: &ChartConfig) -> Option<ChartSpec> {
    signals::is_flow(input.text).then(|| spec(ChartKind::FlowDiagram, input.category_count()))
}

fn correlation(input: &ChartInput<'_>, _cfg: &ChartConfig) -> Option<ChartSpec> {
    match input.correlated_fields() {
        0 | 1 => None,
        2 => Some(spec(ChartKind::Scatter, 2)),
        n => Some(spec(ChartKind::CorrelationMatrix, n)),
    }
}

fn outlier(input: &ChartInput<'_>, _cfg: &ChartConfig) -> Option<ChartSpec> {
    signals::is_outlier(input.text).then(|| spec(ChartKind::AnnotatedScatter, input.category_count()))
}

fn geographic(input: &ChartInput<'_>, _cfg: &ChartConfig) -> Option<ChartSpec> {
    signals::is_geographic(input.text).then(|| spec(ChartKind::Choropleth, input.category_count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyline_core::models::AxisRole;

    fn pick(text: &str, category: &str, evidence: &[(&str, f64)]) -> ChartSpec {
        let evidence: BTreeMap<String, f64> =
            evidence.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        let input = ChartInput {
            text,
            category,
            evidence: &evidence,
        };
        select_chart(&input, &ChartConfig::default())
    }

    #[test]
    fn temporal_is_line_or_area() {
        let line = pick("Online revenue grew 31% in Q4", "trend", &[]);
        assert_eq!(line.kind, ChartKind::Line);
        assert_eq!(line.params.x_axis, AxisRole::Time);
        assert_eq!(pick("Online share rose each quarter since 2022", "trend", &[]).kind, ChartKind::Area);
    }

    #[test]
    fn part_to_whole_depends_on_category_count() {
        let three = [("apparel", 46.0), ("footwear", 31.0), ("accessories", 23.0)];
        assert_eq!(pick("Apparel holds the largest share", "distribution", &three).kind, ChartKind::Pie);
        assert_eq!(pick("Apparel is 46% of total revenue", "distribution", &three).kind, ChartKind::Donut);

        let six: Vec<(&str, f64)> = ["a", "b", "c", "d", "e", "f"].iter().map(|k| (*k, 1.0)).collect();
        assert_eq!(pick("Channel mix by share", "distribution", &six).kind, ChartKind::GroupedBar);

        let nine: Vec<(&str, f64)> = ["a", "b", "c", "d", "e", "f", "g", "h", "i"].iter().map(|k| (*k, 1.0)).collect();
        assert_eq!(pick("Channel mix by share", "distribution", &nine).kind, ChartKind::HorizontalBar);
    }

    #[test]
    fn comparison_switches_to_horizontal_on_long_labels() {
        let short = [("north", 64.0), ("south", 41.0)];
        let bar = pick("North basket size is higher than South", "comparison", &short);
        assert_eq!(bar.kind, ChartKind::Bar);
        assert!(bar.params.emphasis.contains(&EmphasisHint::SortDescending));

        let long = [("northern_flagship_stores", 64.0), ("south", 41.0)];
        assert_eq!(
            pick("North basket size is higher than South", "comparison", &long).kind,
            ChartKind::HorizontalBar
        );
    }

    #[test]
    fn flow_language() {
        assert_eq!(pick("Users moved from trial to paid plans", "other", &[]).kind, ChartKind::FlowDiagram);
    }

    #[test]
    fn correlated_evidence_fields() {
        let two = [("r", 0.71), ("delay_days", 2.4), ("return_rate", 0.18)];
        assert_eq!(pick("Delivery delay and returns move together", "correlation", &two).kind, ChartKind::Scatter);

        let three = [("a", 1.0), ("b", 2.0), ("c", 3.0)];
        let matrix = pick("Drivers move together", "correlation", &three);
        assert_eq!(matrix.kind, ChartKind::CorrelationMatrix);
        assert_eq!(matrix.params.category_count, 3);
    }

    #[test]
    fn outlier_and_geographic_and_default() {
        assert_eq!(pick("Return rates spiked for footwear", "anomaly", &[]).kind, ChartKind::AnnotatedScatter);
        assert_eq!(pick("Growth driven by Region A", "trend", &[]).kind, ChartKind::Choropleth);
        assert_eq!(pick("Customer churn rose 8 pts to 14%", "comparison", &[]).kind, ChartKind::Bar);
    }

    #[test]
    fn selection_is_pure() {
        let a = pick("Online revenue grew 31% in Q4", "trend", &[]);
        let b = pick("Online revenue grew 31% in Q4", "trend", &[]);
        assert_eq!(a, b);
    }
}
