//! Narrative prose never introduces a number absent from its inputs.

use proptest::prelude::*;

use storyline_core::models::{
    Insight, KpiKind, NarrativeMode, Score, StoryKpi, StorySection, StoryThesis, ThesisFrame,
    ValueSemantics,
};
use storyline_narrative::{synthesize_executive_summary, synthesize_section_narrative};

/// Maximal digit runs in `text`.
fn numbers(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn fixture(pct: u32, amount: u32, confidence: f64) -> (StoryThesis, Vec<StoryKpi>, StorySection, Vec<Insight>) {
    let text = format!("Revenue grew {pct}% to ${amount}K in the north");
    let insight = Insight {
        id: "rev".into(),
        text: text.clone(),
        category: "trend".into(),
        confidence: Score::new(confidence),
        business_value: Score::new(0.9),
        actionability: Score::new(0.8),
        evidence: Default::default(),
    };
    let kpis = vec![
        StoryKpi {
            value: format!("{pct}%"),
            label: "Revenue grew".into(),
            context: text.clone(),
            kind: KpiKind::Headline,
            rank: 1,
            source_insight_id: Some("rev".into()),
            score: 0.9,
            semantics: ValueSemantics::Percentage,
        },
        StoryKpi {
            value: format!("${amount}K"),
            label: "Revenue grew".into(),
            context: text.clone(),
            kind: KpiKind::Supporting,
            rank: 2,
            source_insight_id: Some("rev".into()),
            score: 0.8,
            semantics: ValueSemantics::Currency,
        },
    ];
    let thesis = StoryThesis {
        title: "Key Findings".into(),
        hook: format!("{text}."),
        summary: format!("The findings below are led by: {text}."),
        implication: "Each finding should be weighed on its own evidence.".into(),
        confidence: Score::new(confidence),
        supporting_insight_ids: vec!["rev".into()],
        frame: ThesisFrame::Fallback,
    };
    let section = StorySection {
        id: "section-1".into(),
        title: "Key Findings".into(),
        subtitle: None,
        thesis: format!("{text}."),
        kpis: kpis.clone(),
        charts: Vec::new(),
        insight_ids: vec!["rev".into()],
        narrative: String::new(),
        order: 1,
    };
    (thesis, kpis, section, vec![insight])
}

proptest! {
    #[test]
    fn prop_no_new_numbers(pct in 1u32..100, amount in 1u32..1000, confidence in 0.0f64..=1.0) {
        let (thesis, kpis, section, insights) = fixture(pct, amount, confidence);
        let allowed: Vec<String> = numbers(&insights[0].text)
            .into_iter()
            .chain(numbers("section-1"))
            .collect();

        for mode in NarrativeMode::ALL {
            let summary = synthesize_executive_summary(&thesis, &kpis, std::slice::from_ref(&section), mode);
            let narrative = synthesize_section_narrative(&section, &insights, None, mode);
            for n in numbers(&summary).into_iter().chain(numbers(&narrative)) {
                prop_assert!(allowed.contains(&n), "{} introduced in {:?} mode", n, mode);
            }
        }
    }
}
