use url::Url;

use crate::lexicon::Lexicon;

pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Infers the country of origin.
///
/// A URL whose top-level domain is in the suffix table wins outright. Otherwise the
/// first country (in declared priority order) with a phrase in the text is returned.
pub fn detect_country(lexicon: &Lexicon, lowered_text: &str, url: Option<&Url>) -> String {
    if let Some(country) = url.and_then(|u| country_from_url(lexicon, u)) {
        return country.to_string();
    }

    lexicon
        .country_priority()
        .iter()
        .find(|c| c.phrases.iter().any(|p| lowered_text.contains(p.as_str())))
        .map(|c| c.country.clone())
        .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string())
}

fn country_from_url<'a>(lexicon: &'a Lexicon, url: &Url) -> Option<&'a str> {
    let host = url.host_str()?;
    let tld = host.trim_end_matches('.').rsplit('.').next()?;
    lexicon.country_for_tld(tld)
}
