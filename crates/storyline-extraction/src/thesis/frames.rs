//! Thesis text templates per frame.
//!
//! Templates only rearrange words already present in the insights; they
//! never print a computed number.

use storyline_core::models::InsightCategory;
use storyline_core::text::{capitalize, first_sentence, lower_first, strip_terminal, title_case};

/// Rendered thesis prose.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameText {
    pub title: String,
    pub hook: String,
    pub summary: String,
    pub implication: String,
}

pub fn paradox(strength_noun: &str, vulnerability_noun: &str, strength_text: &str, vulnerability_text: &str) -> FrameText {
    let title = if vulnerability_noun == "risk" {
        format!("{} Masks Hidden Risk", title_case(strength_noun))
    } else {
        format!(
            "{} Masks {} Risk",
            title_case(strength_noun),
            title_case(vulnerability_noun)
        )
    };

    let strength_lead = strip_terminal(first_sentence(strength_text));
    let vulnerability_lead = strip_terminal(first_sentence(vulnerability_text));
    let hook = if strength_lead == vulnerability_lead {
        format!("{strength_lead}.")
    } else {
        format!("{strength_lead}, yet {}.", lower_first(vulnerability_lead))
    };

    FrameText {
        title,
        hook,
        summary: format!(
            "The data shows {strength_noun} and {vulnerability_noun} side by side. {}.",
            capitalize(vulnerability_lead)
        ),
        implication: format!(
            "Current {strength_noun} is no guarantee; {vulnerability_noun} needs attention before it erodes the base."
        ),
    }
}

pub fn dominant_theme(category: &str, lead_text: &str) -> FrameText {
    let lead = strip_terminal(first_sentence(lead_text));
    FrameText {
        title: format!("{} Signals Define the Story", title_case(&category.replace('_', " "))),
        hook: format!("{lead}."),
        summary: format!(
            "{} findings dominate the evidence, led by: {}.",
            capitalize(category),
            lower_first(lead)
        ),
        implication: theme_implication(category),
    }
}

pub fn surprise(category: &str, lead_text: &str) -> FrameText {
    let lead = strip_terminal(first_sentence(lead_text));
    let noun = match InsightCategory::from_label(category) {
        InsightCategory::Correlation => "Link",
        _ => "Anomaly",
    };
    FrameText {
        title: format!("An Unexpected {noun} Changes the Picture"),
        hook: format!("{lead}."),
        summary: format!("A high-confidence {category} finding stands out: {}.", lower_first(lead)),
        implication: "This finding warrants validation before it drives decisions.".to_string(),
    }
}

pub fn fallback(title: &str, lead_text: &str) -> FrameText {
    let lead = strip_terminal(first_sentence(lead_text));
    FrameText {
        title: title.to_string(),
        hook: format!("{lead}."),
        summary: format!("The findings below are led by: {}.", lower_first(lead)),
        implication: "Each finding should be weighed on its own evidence.".to_string(),
    }
}

fn theme_implication(category: &str) -> String {
    match InsightCategory::from_label(category) {
        InsightCategory::Trend => {
            "Plans should follow the direction of travel rather than any single snapshot.".to_string()
        }
        InsightCategory::Comparison => {
            "Resources should shift toward the segments that lead and away from those that lag."
                .to_string()
        }
        InsightCategory::Anomaly => {
            "Irregular results need investigation before they are treated as the new normal."
                .to_string()
        }
        InsightCategory::Distribution => {
            "Attention belongs where the concentration is, not spread evenly across the mix."
                .to_string()
        }
        InsightCategory::Correlation => {
            "Linked drivers should be managed together rather than in isolation.".to_string()
        }
        InsightCategory::Other => {
            format!("Decisions should account for the {category} pattern that runs through the data.")
        }
    }
}
