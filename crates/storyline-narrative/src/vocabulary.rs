//! Domain-neutral vocabulary keyed by the KPI set's value semantics.

use storyline_core::models::{StoryKpi, ValueSemantics};

/// Words the templates draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    /// "financial", "rate", ...
    pub measure: &'static str,
    pub impact: &'static str,
    pub recommendation: &'static str,
    pub method: &'static str,
}

impl Vocabulary {
    pub fn for_semantics(semantics: Option<ValueSemantics>) -> Self {
        match semantics {
            Some(ValueSemantics::Currency) => Self {
                measure: "financial",
                impact: "the value at stake",
                recommendation: "Prioritize the moves that protect and grow this value.",
                method: "monetary amounts as reported, abbreviated for display",
            },
            Some(ValueSemantics::Percentage) => Self {
                measure: "rate",
                impact: "the shift in rates",
                recommendation: "Focus on the levers that move these rates.",
                method: "rates and point changes as reported",
            },
            Some(ValueSemantics::Duration) => Self {
                measure: "time",
                impact: "the time cost",
                recommendation: "Target the steps where time is lost.",
                method: "durations as reported, abbreviated for display",
            },
            Some(ValueSemantics::Count) => Self {
                measure: "volume",
                impact: "the change in volume",
                recommendation: "Direct capacity to where volume concentrates.",
                method: "counts as reported, abbreviated for display",
            },
            None => Self {
                measure: "qualitative",
                impact: "the direction of the findings",
                recommendation: "Validate these findings with measured outcomes before committing resources.",
                method: "qualitative findings without quoted figures",
            },
        }
    }

    pub fn for_kpis(kpis: &[StoryKpi]) -> Self {
        Self::for_semantics(dominant_semantics(kpis))
    }
}

/// Most frequent semantics in `kpis`; ties go to the better-ranked KPI.
pub fn dominant_semantics(kpis: &[StoryKpi]) -> Option<ValueSemantics> {
    let mut counts: Vec<(ValueSemantics, usize)> = Vec::new();
    for kpi in kpis {
        match counts.iter_mut().find(|(s, _)| *s == kpi.semantics) {
            Some((_, n)) => *n += 1,
            None => counts.push((kpi.semantics, 1)),
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(ValueSemantics, usize)>, cur| match best {
            Some(b) if b.1 >= cur.1 => Some(b),
            _ => Some(cur),
        })
        .map(|(s, _)| s)
}
