//! Narrative synthesizer.
//!
//! Fills mode templates from a thesis, KPI lists and sections. The
//! structural inputs are shared across modes; only the strings produced
//! here differ between them.

use storyline_core::config::defaults::DEFAULT_QUOTED_KPIS;
use storyline_core::config::NarrativeConfig;
use storyline_core::models::{Insight, NarrativeMode, Score, StoryKpi, StorySection, StoryThesis};
use storyline_core::text::{first_sentence, join_natural, lower_first, strip_terminal};
use tracing::debug;

use crate::confidence::ConfidenceLevel;
use crate::templates::{figures_template, render, section_template, summary_template};
use crate::vocabulary::Vocabulary;

/// Mode-specific text for one manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Narration {
    /// Input sections with `narrative` filled in.
    pub sections: Vec<StorySection>,
    pub executive_summary: String,
    pub key_findings: Vec<String>,
}

/// Config-aware front end over the free synthesis functions.
#[derive(Debug, Clone, Default)]
pub struct NarrativeSynthesizer {
    config: NarrativeConfig,
}

impl NarrativeSynthesizer {
    pub fn new(config: NarrativeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// Produce every mode-specific string of a manifest.
    pub fn narrate(
        &self,
        thesis: &StoryThesis,
        top_kpis: &[StoryKpi],
        sections: &[StorySection],
        insights: &[Insight],
        mode: NarrativeMode,
    ) -> Narration {
        let quoted = self.config.quoted_kpis;
        let sections: Vec<StorySection> = sections
            .iter()
            .map(|section| StorySection {
                narrative: section_narrative(section, insights, &section.kpis, mode, quoted),
                ..section.clone()
            })
            .collect();

        let executive_summary = executive_summary(thesis, top_kpis, &sections, mode, quoted);
        let key_findings = synthesize_key_findings(&sections, self.config.max_key_findings);

        debug!(
            mode = mode.as_str(),
            sections = sections.len(),
            key_findings = key_findings.len(),
            "narration rendered"
        );

        Narration {
            sections,
            executive_summary,
            key_findings,
        }
    }
}

/// Prose for one section. `kpis` defaults to the section's own list.
pub fn synthesize_section_narrative(
    section: &StorySection,
    insights: &[Insight],
    kpis: Option<&[StoryKpi]>,
    mode: NarrativeMode,
) -> String {
    section_narrative(
        section,
        insights,
        kpis.unwrap_or(section.kpis.as_slice()),
        mode,
        DEFAULT_QUOTED_KPIS,
    )
}

/// Story-level summary quoting the top KPI values verbatim.
pub fn synthesize_executive_summary(
    thesis: &StoryThesis,
    kpis: &[StoryKpi],
    sections: &[StorySection],
    mode: NarrativeMode,
) -> String {
    executive_summary(thesis, kpis, sections, mode, DEFAULT_QUOTED_KPIS)
}

/// One line per section in display order, capped at `limit`.
pub fn synthesize_key_findings(sections: &[StorySection], limit: usize) -> Vec<String> {
    sections
        .iter()
        .take(limit)
        .map(|section| {
            let claim = strip_terminal(&section.thesis);
            match section.kpis.first() {
                Some(kpi) if !claim.contains(&kpi.value) => {
                    format!("{}: {} ({}).", section.title, claim, kpi.value)
                }
                _ => format!("{}: {}.", section.title, claim),
            }
        })
        .collect()
}

fn executive_summary(
    thesis: &StoryThesis,
    kpis: &[StoryKpi],
    sections: &[StorySection],
    mode: NarrativeMode,
    quoted: usize,
) -> String {
    let vocab = Vocabulary::for_kpis(kpis);
    let level = ConfidenceLevel::from_score(thesis.confidence.value());
    let figures = figures_sentence(kpis, mode, quoted);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    let section_list = join_natural(&titles);
    let frame = thesis.frame.as_str().replace('_', " ");

    render(
        summary_template(mode),
        &[
            ("title", strip_terminal(&thesis.title)),
            ("hook", thesis.hook.as_str()),
            ("summary", thesis.summary.as_str()),
            ("implication", thesis.implication.as_str()),
            ("figures", figures.as_str()),
            ("recommendation", vocab.recommendation),
            ("impact", vocab.impact),
            ("method", vocab.method),
            ("sections", section_list.as_str()),
            ("frame", frame.as_str()),
            ("level", level.as_str()),
            ("caveat", level.caveat()),
        ],
    )
}

fn section_narrative(
    section: &StorySection,
    insights: &[Insight],
    kpis: &[StoryKpi],
    mode: NarrativeMode,
    quoted: usize,
) -> String {
    let members: Vec<&Insight> = section
        .insight_ids
        .iter()
        .filter_map(|id| insights.iter().find(|i| &i.id == id))
        .collect();
    let vocab = Vocabulary::for_kpis(kpis);
    let figures = figures_sentence(kpis, mode, quoted);

    match mode {
        NarrativeMode::Executive => render(
            section_template(mode),
            &[
                ("thesis", section.thesis.as_str()),
                ("figures", figures.as_str()),
                ("recommendation", vocab.recommendation),
            ],
        ),
        NarrativeMode::Analyst => render(
            section_template(mode),
            &[
                ("thesis", section.thesis.as_str()),
                ("related", related_sentence(&section.thesis, &members).as_str()),
                ("pattern", pattern_sentence(&members).as_str()),
                ("figures", figures.as_str()),
            ],
        ),
        NarrativeMode::Technical => {
            let mean = Score::mean(members.iter().map(|i| i.confidence));
            let floor = members
                .iter()
                .map(|i| i.confidence)
                .fold(None, |lo: Option<Score>, c| match lo {
                    Some(l) if l <= c => Some(l),
                    _ => Some(c),
                })
                .unwrap_or_default();
            let level = ConfidenceLevel::from_score(mean.value());
            let categories = category_list(&members);
            let isolation = if members.len() == 1 {
                " This section rests on an isolated finding."
            } else {
                ""
            };
            render(
                section_template(mode),
                &[
                    ("thesis", section.thesis.as_str()),
                    ("figures", figures.as_str()),
                    ("categories", categories.as_str()),
                    ("measure", vocab.measure),
                    ("method", vocab.method),
                    ("level", level.as_str()),
                    ("floor", ConfidenceLevel::from_score(floor.value()).as_str()),
                    ("caveat", level.caveat()),
                    ("isolation", isolation),
                ],
            )
        }
    }
}

/// "23% (revenue grew) and 8 pts (customer churn rose)" wrapped in the
/// mode's sentence, or empty when there is nothing to quote.
fn figures_sentence(kpis: &[StoryKpi], mode: NarrativeMode, quoted: usize) -> String {
    let parts: Vec<String> = kpis
        .iter()
        .take(quoted)
        .map(|k| format!("{} ({})", k.value, lower_first(&k.label)))
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
    render(figures_template(mode), &[("figures", join_natural(&refs).as_str())]) + " "
}

/// Other members' lead sentences, for analyst prose.
fn related_sentence(thesis: &str, members: &[&Insight]) -> String {
    let thesis = strip_terminal(thesis);
    let related: Vec<String> = members
        .iter()
        .map(|i| strip_terminal(first_sentence(&i.text)).to_string())
        .filter(|s| s != thesis && !s.is_empty())
        .map(|s| lower_first(&s))
        .collect();
    if related.is_empty() {
        return String::new();
    }
    format!("Related findings: {}.", related.join("; "))
}

fn pattern_sentence(members: &[&Insight]) -> String {
    let categories = distinct_categories(members);
    match categories.as_slice() {
        [] => String::new(),
        [one] => format!("The findings share a {one} pattern."),
        many => {
            let refs: Vec<&str> = many.iter().map(String::as_str).collect();
            format!("The section links {} evidence.", join_natural(&refs))
        }
    }
}

fn category_list(members: &[&Insight]) -> String {
    let categories = distinct_categories(members);
    if categories.is_empty() {
        return "unclassified".to_string();
    }
    let refs: Vec<&str> = categories.iter().map(String::as_str).collect();
    join_natural(&refs)
}

fn distinct_categories(members: &[&Insight]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for insight in members {
        let label = insight.category.replace('_', " ");
        if !label.is_empty() && !out.contains(&label) {
            out.push(label);
        }
    }
    out
}
