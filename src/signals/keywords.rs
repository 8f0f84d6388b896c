use std::collections::HashMap;

use crate::lexicon::Lexicon;

pub const MAX_KEYWORDS: usize = 5;

/// Tokens of this many characters or fewer are never keywords.
pub const SHORT_TOKEN_CHARS: usize = 3;

/// Returns up to `max` keywords ranked by frequency.
///
/// Punctuation is stripped, text lowercased and split on whitespace; stopwords and
/// short tokens are dropped. Ties keep first-appearance order.
pub fn extract_keywords(lexicon: &Lexicon, text: &str, max: usize) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    // token -> (frequency, first index)
    let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in normalized
        .split_whitespace()
        .filter(|t| !lexicon.is_stopword(t) && t.chars().count() > SHORT_TOKEN_CHARS)
    {
        let next_index = order.len();
        let entry = stats.entry(token).or_insert_with(|| {
            order.push(token);
            (0, next_index)
        });
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = order
        .into_iter()
        .filter_map(|t| stats.get(t).map(|(freq, first)| (t, *freq, *first)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(max)
        .map(|(t, _, _)| t.to_string())
        .collect()
}
