use crate::lexicon::{Category, Lexicon};

/// Result of matching one category against a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorMatch {
    /// Number of listed phrases found (repeated and overlapping phrases each count).
    pub count: usize,
}

impl IndicatorMatch {
    pub fn any(&self) -> bool {
        self.count > 0
    }
}

/// Counts phrases occurring as substrings of an already-lowercased text.
pub fn count_phrases(lowered_text: &str, phrases: &[String]) -> IndicatorMatch {
    let count = phrases
        .iter()
        .filter(|phrase| lowered_text.contains(phrase.as_str()))
        .count();
    IndicatorMatch { count }
}

/// Case-insensitive substring match of every phrase in `category` against `text`.
pub fn match_category(lexicon: &Lexicon, text: &str, category: Category) -> IndicatorMatch {
    count_phrases(&text.to_lowercase(), lexicon.phrases(category))
}
