use url::Url;

use crate::lexicon::Lexicon;

/// Parses an absolute URL; anything unparseable counts as "no URL".
pub fn parse_url(raw: &str) -> Option<Url> {
    Url::parse(raw.trim()).ok()
}

/// Network location of `url`: host plus an explicit non-default port.
pub fn netloc(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Domain of a raw URL string, if it parses and has a host.
pub fn domain_of(raw: &str) -> Option<String> {
    parse_url(raw).as_ref().and_then(netloc)
}

/// A source is verified when its domain contains a trusted outlet as a substring.
pub fn is_verified_source(lexicon: &Lexicon, url: Option<&Url>) -> bool {
    let Some(domain) = url.and_then(netloc) else {
        return false;
    };
    let domain = domain.to_lowercase();

    lexicon
        .trusted_outlets()
        .iter()
        .any(|outlet| domain.contains(outlet.as_str()))
}
