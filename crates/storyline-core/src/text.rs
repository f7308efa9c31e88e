//! Small text helpers shared across crates.

/// First sentence of `text`, terminal punctuation included.
///
/// A period only ends a sentence when followed by whitespace or the end of
/// input, so "$4.2M" stays intact.
pub fn first_sentence(text: &str) -> &str {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if matches!(b, b'.' | b'!' | b'?') {
            let at_end = i + 1 == bytes.len();
            let before_space = bytes.get(i + 1).is_some_and(|n| n.is_ascii_whitespace());
            if at_end || before_space {
                return &trimmed[..=i];
            }
        }
    }
    trimmed
}

/// `text` as a sentence: trimmed and ending in terminal punctuation.
pub fn as_sentence(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

/// `text` with its terminal punctuation removed.
pub fn strip_terminal(text: &str) -> &str {
    text.trim().trim_end_matches(['.', '!', '?'])
}

/// Upper-case the first character of each word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character unless the first word is an acronym,
/// so a sentence can be spliced mid-clause: "Revenue grew" → "revenue grew".
pub fn lower_first(text: &str) -> String {
    let first_word = text.split_whitespace().next().unwrap_or_default();
    let letters: Vec<char> = first_word.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return text.to_string();
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase, ASCII-alphanumeric, dash-separated slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            dash = false;
        } else if !dash && !slug.is_empty() {
            slug.push('-');
            dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Join items as English prose: "a", "a and b", "a, b and c".
pub fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
