//! Section titles from cluster concepts.

use storyline_core::text::capitalize;

/// Title words for a cluster: the seed, then concepts appearing in at least
/// two member bags by frequency, up to `max_words`.
pub fn title_words<'a>(seed: &'a str, member_bags: &[&'a [String]], max_words: usize) -> Vec<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for bag in member_bags.iter().copied() {
        for concept in bag {
            match counts.iter_mut().find(|(c, _)| *c == concept.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((concept.as_str(), 1)),
            }
        }
    }
    // Stable: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut words = vec![seed];
    words.extend(
        counts
            .into_iter()
            .filter(|(c, n)| *n >= 2 && *c != seed)
            .map(|(c, _)| c),
    );
    words.truncate(max_words.max(1));
    words
}

/// Render title words as a short title-cased phrase.
pub fn render_title(words: &[&str]) -> String {
    let words: Vec<String> = words.iter().map(|w| capitalize(w)).collect();
    match words.as_slice() {
        [] => String::new(),
        [one] => format!("{one} Highlights"),
        [a, b] => format!("{a} & {b}"),
        [init @ .., last] => format!("{} & {}", init.join(", "), last),
    }
}
