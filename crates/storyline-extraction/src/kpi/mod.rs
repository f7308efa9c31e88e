//! KPI extractor: mines numeric callouts from insight text and ranks them.
//!
//! The same routine serves the global top list and every section-scoped
//! list; only the insight scope and the limit differ.

pub mod labels;
pub mod scoring;

use std::cmp::Ordering;
use std::collections::HashSet;

use storyline_core::config::KpiConfig;
use storyline_core::errors::ExtractionWarning;
use storyline_core::models::{Insight, KpiKind, StoryKpi, ValueSemantics};
use tracing::debug;

use crate::numbers::{scan_numbers, NumericMatch, NumericShape};

pub use labels::{kpi_context, kpi_label};
pub use scoring::{magnitude_bonus, rank_score};

/// A scored KPI before the cut.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCandidate {
    /// Position of the source insight within the scope.
    pub insight_order: usize,
    /// Position of the match within the insight text.
    pub position: usize,
    pub insight_id: String,
    pub value: String,
    pub label: String,
    pub context: String,
    pub kind: KpiKind,
    pub score: f64,
}

/// Kind of a match from its shape and its position in the insight.
pub fn classify(m: &NumericMatch, position: usize) -> KpiKind {
    match m.shape {
        NumericShape::Delta => KpiKind::Delta,
        _ if position == 0 => KpiKind::Headline,
        NumericShape::Magnitude if m.currency.is_none() => KpiKind::Count,
        _ => KpiKind::Supporting,
    }
}

/// All KPI candidates of one insight, in text order.
///
/// A value repeated within the same insight is kept once.
pub fn insight_candidates(insight: &Insight, insight_order: usize, cfg: &KpiConfig) -> Vec<KpiCandidate> {
    let mut seen = HashSet::new();
    scan_numbers(&insight.text, cfg.magnitude_min_digits)
        .into_iter()
        .filter(|m| seen.insert(m.formatted.clone()))
        .enumerate()
        .map(|(position, m)| {
            let kind = classify(&m, position);
            KpiCandidate {
                insight_order,
                position,
                insight_id: insight.id.clone(),
                label: kpi_label(&insight.text, m.start, m.end, &insight.category),
                context: kpi_context(&insight.text, m.start, m.end),
                score: rank_score(
                    kind,
                    insight.business_value.value(),
                    insight.confidence.value(),
                    m.value,
                ),
                value: m.formatted,
                kind,
            }
        })
        .collect()
}

/// Descending score; ties go to the earlier insight, then the earlier match.
fn by_rank(a: &KpiCandidate, b: &KpiCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(a.insight_order.cmp(&b.insight_order))
        .then(a.position.cmp(&b.position))
}

/// Top `limit` KPIs across `insights`, ranked.
pub fn extract_kpis<'a, I>(insights: I, limit: usize, cfg: &KpiConfig) -> Vec<StoryKpi>
where
    I: IntoIterator<Item = &'a Insight>,
{
    extract_kpis_with_report(insights, limit, cfg).0
}

/// [`extract_kpis`] plus a warning per insight that yielded no candidate.
pub fn extract_kpis_with_report<'a, I>(
    insights: I,
    limit: usize,
    cfg: &KpiConfig,
) -> (Vec<StoryKpi>, Vec<ExtractionWarning>)
where
    I: IntoIterator<Item = &'a Insight>,
{
    let mut warnings = Vec::new();
    let mut candidates = Vec::new();

    for (order, insight) in insights.into_iter().enumerate() {
        let found = insight_candidates(insight, order, cfg);
        if found.is_empty() {
            warnings.push(ExtractionWarning::NoKpiCandidates {
                insight_id: insight.id.clone(),
            });
        }
        candidates.extend(found);
    }

    candidates.sort_by(by_rank);
    let total = candidates.len();
    let kpis: Vec<StoryKpi> = candidates
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, c)| StoryKpi {
            semantics: ValueSemantics::detect(&c.value),
            value: c.value,
            label: c.label,
            context: c.context,
            kind: c.kind,
            rank: i + 1,
            source_insight_id: Some(c.insight_id),
            score: c.score,
        })
        .collect();

    debug!(candidates = total, selected = kpis.len(), limit, "ranked KPI candidates");
    (kpis, warnings)
}
