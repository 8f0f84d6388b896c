//! Signal extractors.
//!
//! Stateless functions that turn article text (and an optional URL) into the
//! primitive signals consumed by [`crate::engine`]. Everything here is pure: the
//! same text, URL and classifier output always give the same [`SignalBundle`].

pub mod country;
pub mod credibility;
pub mod keywords;
pub mod matcher;
pub mod source;


pub use country::{UNKNOWN_COUNTRY, detect_country};
pub use credibility::{CredibilityScore, NEUTRAL_CREDIBILITY, credibility_score};
pub use keywords::{MAX_KEYWORDS, extract_keywords};
pub use matcher::{IndicatorMatch, count_phrases, match_category};
pub use source::{domain_of, is_verified_source, netloc, parse_url};

use serde::Serialize;

use crate::classifier::{ClassifierOutput, SentimentLabel};
use crate::lexicon::{Category, Lexicon};

/// Every signal the decision engine looks at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalBundle {
    /// Positive share of matched credibility indicators, `0.5` when none matched.
    pub credibility_score: f64,
    /// At most [`MAX_KEYWORDS`] keywords, most frequent first.
    pub keywords: Vec<String>,
    /// Inferred country or [`UNKNOWN_COUNTRY`].
    pub country: String,
    pub is_verified: bool,
    pub fake_indicator_count: usize,
    pub legitimate_indicator_count: usize,
    pub is_obviously_fake: bool,
    pub is_satirical: bool,
    pub is_military_topic: bool,
    pub is_business_topic: bool,
    /// Text names a major economy ("u.s.", "britain", ...).
    pub mentions_major_country: bool,
    pub classifier_label: SentimentLabel,
    /// Classifier probability in `[0, 1]`.
    pub classifier_score: f64,
}

impl Default for SignalBundle {
    fn default() -> Self {
        Self {
            credibility_score: NEUTRAL_CREDIBILITY,
            keywords: Vec::new(),
            country: UNKNOWN_COUNTRY.to_string(),
            is_verified: false,
            fake_indicator_count: 0,
            legitimate_indicator_count: 0,
            is_obviously_fake: false,
            is_satirical: false,
            is_military_topic: false,
            is_business_topic: false,
            mentions_major_country: false,
            classifier_label: SentimentLabel::Positive,
            classifier_score: 0.5,
        }
    }
}

/// Extracts all signals for one article.
pub fn extract_signals(
    lexicon: &Lexicon,
    content: &str,
    url: Option<&str>,
    classification: ClassifierOutput,
) -> SignalBundle {
    let lowered = content.to_lowercase();
    let parsed_url = url.and_then(parse_url);
    let matches = |category| count_phrases(&lowered, lexicon.phrases(category));

    let credibility = credibility_score(lexicon, &lowered);
    let mentions_major_country = lexicon
        .major_country_tokens()
        .iter()
        .any(|token| lowered.contains(token.as_str()));

    SignalBundle {
        credibility_score: credibility.score,
        keywords: extract_keywords(lexicon, content, MAX_KEYWORDS),
        country: detect_country(lexicon, &lowered, parsed_url.as_ref()),
        is_verified: is_verified_source(lexicon, parsed_url.as_ref()),
        fake_indicator_count: matches(Category::FakeNews).count,
        legitimate_indicator_count: matches(Category::LegitimateNews).count,
        is_obviously_fake: matches(Category::ObviouslyFake).any(),
        is_satirical: matches(Category::Satirical).any(),
        is_military_topic: matches(Category::Military).any(),
        is_business_topic: matches(Category::Business).any(),
        mentions_major_country,
        classifier_label: classification.label,
        classifier_score: classification.score,
    }
}
