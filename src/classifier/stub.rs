//! Deterministic lexical sentiment used when no model directory is configured.

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "positive", "success", "successful", "growth", "improve",
    "improved", "benefit", "win", "wins", "agreement", "celebrate", "support", "strong", "gain",
    "gains", "progress", "record", "peace", "safe", "recovery", "approved", "welcome",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "negative", "fail", "failed", "failure", "crisis", "decline",
    "loss", "losses", "attack", "war", "death", "dead", "killed", "fear", "fraud", "scam", "hoax",
    "shocking", "danger", "dangerous", "collapse", "threat", "worst", "conspiracy", "fake",
];

/// Scores `text` by counting sentiment words.
///
/// Returns `(is_negative, score)` where `score` lies in `[0.5, 1.0)`: `0.5` when
/// the counts tie, approaching `1.0` as one side dominates.
pub(crate) fn lexical_sentiment(text: &str) -> (bool, f64) {
    let lowered = text.to_lowercase();
    let (mut positive, mut negative) = (0usize, 0usize);

    for token in lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        if POSITIVE_WORDS.contains(&token) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token) {
            negative += 1;
        }
    }

    let margin = positive.abs_diff(negative) as f64;
    let total = (positive + negative) as f64;
    let score = 0.5 + 0.5 * margin / (total + 1.0);

    (negative > positive, score)
}
