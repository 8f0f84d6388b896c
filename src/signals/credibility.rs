use serde::Serialize;

use super::matcher::count_phrases;
use crate::lexicon::{Category, Lexicon};

/// Score used when no credibility indicator matched.
pub const NEUTRAL_CREDIBILITY: f64 = 0.5;

/// Ratio of positive to all matched credibility indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CredibilityScore {
    pub score: f64,
    pub positive: usize,
    pub negative: usize,
}

pub fn credibility_score(lexicon: &Lexicon, lowered_text: &str) -> CredibilityScore {
    let positive = count_phrases(lowered_text, lexicon.phrases(Category::CredibilityPositive)).count;
    let negative = count_phrases(lowered_text, lexicon.phrases(Category::CredibilityNegative)).count;

    let total = positive + negative;
    let score = if total == 0 {
        NEUTRAL_CREDIBILITY
    } else {
        positive as f64 / total as f64
    };

    CredibilityScore {
        score,
        positive,
        negative,
    }
}
