//! Narrative templates per mode.
//!
//! Templates use `{name}` placeholders. None of them contains a digit.

use storyline_core::models::NarrativeMode;

/// Executive summary template.
pub fn summary_template(mode: NarrativeMode) -> &'static str {
    match mode {
        NarrativeMode::Executive => "{title}. {hook} {figures}{implication} {recommendation}",
        NarrativeMode::Analyst => {
            "{title}: {summary} The evidence falls into {sections}. {figures}Read together, these findings describe {impact}."
        }
        NarrativeMode::Technical => {
            "{title} ({frame} frame, {level} confidence). {hook} {figures}Method: {method}. {caveat}"
        }
    }
}

/// Section narrative template.
pub fn section_template(mode: NarrativeMode) -> &'static str {
    match mode {
        NarrativeMode::Executive => "{thesis} {figures}{recommendation}",
        NarrativeMode::Analyst => "{thesis} {related}{pattern} {figures}",
        NarrativeMode::Technical => {
            "{thesis} {figures}Derived from {categories} insights on a {measure} basis, using {method}. Member confidence is {level}, with the weakest finding at {floor}. {caveat}{isolation}"
        }
    }
}

/// Sentence introducing quoted KPI values; `{figures}` is the value list.
pub fn figures_template(mode: NarrativeMode) -> &'static str {
    match mode {
        NarrativeMode::Executive => "The numbers that matter: {figures}. ",
        NarrativeMode::Analyst => "The strongest signals are {figures}. ",
        NarrativeMode::Technical => "Primary measures: {figures}. ",
    }
}

/// Render a template with the given substitutions.
///
/// Single pass, so braces inside substituted text are left alone.
/// Unknown placeholders are kept verbatim.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    collapse_spaces(&out)
}

/// Collapse runs of whitespace left by empty substitutions.
fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
