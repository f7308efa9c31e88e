//! Thesis extractor.
//!
//! Evaluates frames in priority order (paradox, dominant theme, surprise)
//! and falls back to a generic frame. Deterministic for a given input order;
//! every tie goes to the earlier insight.

pub mod frames;
pub mod paradox;

use storyline_core::config::ThesisConfig;
use storyline_core::constants::FALLBACK_THESIS_TITLE;
use storyline_core::models::{Insight, Score, StoryThesis, ThesisFrame};
use storyline_core::traits::IParadoxDetector;
use tracing::debug;

pub use paradox::KeywordParadoxDetector;

use frames::FrameText;

/// Select the single thesis for `insights`.
///
/// `insights` must not be empty; the adapter guarantees that.
pub fn extract_thesis(
    insights: &[Insight],
    detector: &dyn IParadoxDetector,
    cfg: &ThesisConfig,
) -> StoryThesis {
    let thesis = if insights.len() >= cfg.min_frame_corpus {
        paradox_frame(insights, detector, cfg)
            .or_else(|| theme_frame(insights, cfg))
            .or_else(|| surprise_frame(insights, cfg))
    } else {
        None
    }
    .unwrap_or_else(|| fallback_frame(insights, cfg));

    debug!(
        frame = thesis.frame.as_str(),
        confidence = thesis.confidence.value(),
        supporting = thesis.supporting_insight_ids.len(),
        "thesis selected"
    );
    thesis
}

fn paradox_frame(
    insights: &[Insight],
    detector: &dyn IParadoxDetector,
    cfg: &ThesisConfig,
) -> Option<StoryThesis> {
    let texts: Vec<&str> = insights.iter().map(|i| i.text.as_str()).collect();
    // A paradox needs two insights; one sentence cannot contradict itself.
    let candidate = detector.detect(&texts).into_iter().find(|c| {
        c.strength_index != c.vulnerability_index
            && c.strength_value > cfg.paradox_min_value
            && c.vulnerability_value > cfg.paradox_min_value
    })?;

    let strength = insights.get(candidate.strength_index)?;
    let vulnerability = insights.get(candidate.vulnerability_index)?;
    debug!(
        detector = detector.name(),
        strength = %candidate.strength_term,
        vulnerability = %candidate.vulnerability_term,
        "paradox frame matched"
    );

    let supporting = [strength, vulnerability];
    let text = frames::paradox(
        paradox::strength_noun(&candidate.strength_term),
        paradox::vulnerability_noun(&candidate.vulnerability_term),
        &strength.text,
        &vulnerability.text,
    );
    Some(assemble(text, &supporting, ThesisFrame::Paradox, cfg))
}

fn theme_frame(insights: &[Insight], cfg: &ThesisConfig) -> Option<StoryThesis> {
    // Categories in first-appearance order so ties keep the earlier one.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for insight in insights {
        match counts.iter_mut().find(|(c, _)| *c == insight.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((insight.category.as_str(), 1)),
        }
    }
    let (category, count) = counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, cur| match best {
            Some(b) if b.1 >= cur.1 => Some(b),
            _ => Some(cur),
        })?;

    let share = count as f64 / insights.len() as f64;
    if share <= cfg.theme_dominance {
        return None;
    }

    let mut members: Vec<&Insight> = insights.iter().filter(|i| i.category == category).collect();
    // Stable sort keeps input order among equal business values.
    members.sort_by(|a, b| b.business_value.value().total_cmp(&a.business_value.value()));
    members.truncate(cfg.max_supporting_insights.max(1));

    let text = frames::dominant_theme(category, &members[0].text);
    Some(assemble(text, &members, ThesisFrame::DominantTheme, cfg))
}

fn surprise_frame(insights: &[Insight], cfg: &ThesisConfig) -> Option<StoryThesis> {
    let pick = insights
        .iter()
        .filter(|i| i.kind().is_surprising() && i.confidence.value() > cfg.surprise_confidence)
        .fold(None, |best: Option<&Insight>, cur| match best {
            Some(b) if b.confidence.value() >= cur.confidence.value() => Some(b),
            _ => Some(cur),
        })?;

    let text = frames::surprise(&pick.category, &pick.text);
    Some(assemble(text, &[pick], ThesisFrame::Surprise, cfg))
}

fn fallback_frame(insights: &[Insight], cfg: &ThesisConfig) -> StoryThesis {
    let lead = insights.iter().fold(None, |best: Option<&Insight>, cur| match best {
        Some(b) if b.business_value.value() >= cur.business_value.value() => Some(b),
        _ => Some(cur),
    });

    let (text, ids) = match lead {
        Some(lead) => (
            frames::fallback(FALLBACK_THESIS_TITLE, &lead.text),
            vec![lead.id.clone()],
        ),
        None => (
            frames::fallback(FALLBACK_THESIS_TITLE, FALLBACK_THESIS_TITLE),
            Vec::new(),
        ),
    };

    StoryThesis {
        title: text.title,
        hook: text.hook,
        summary: text.summary,
        implication: text.implication,
        confidence: Score::new(cfg.fallback_confidence),
        supporting_insight_ids: ids,
        frame: ThesisFrame::Fallback,
    }
}

fn assemble(text: FrameText, supporting: &[&Insight], frame: ThesisFrame, cfg: &ThesisConfig) -> StoryThesis {
    StoryThesis {
        title: text.title,
        hook: text.hook,
        summary: text.summary,
        implication: text.implication,
        confidence: Score::mean(supporting.iter().map(|i| i.confidence)).capped(cfg.confidence_cap),
        supporting_insight_ids: supporting.iter().map(|i| i.id.clone()).collect(),
        frame,
    }
}
