//! Metadata provider.
//!
//! Best-effort scraping of a source page's Open Graph tags for the analysis
//! response. Failures never reach the caller: they are logged and yield an empty
//! [`SourceMetadata`].

pub mod fetcher;
pub mod html;

#[cfg(test)]
mod tests;

pub use fetcher::{
    FetchConfig, FetchError, FetchErrorCategory, FetchProfile, FetchedPage, HttpFetcher,
    PageFetcher,
};
#[cfg(any(test, feature = "mock"))]
pub use fetcher::MockPageFetcher;
pub use html::HtmlDocument;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, error};
use url::Url;

use crate::signals::netloc;

/// Page metadata. Absent fields stay `None`; nothing is invented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub domain: Option<String>,
}

impl SourceMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.author.is_none()
            && self.date.is_none()
            && self.domain.is_none()
    }

    /// Extracts Open Graph fields from a page that was fetched from `url`.
    pub fn from_page(url: &Url, document: &HtmlDocument) -> Self {
        Self {
            title: document.meta_property("og:title"),
            description: document.meta_property("og:description"),
            author: document.meta_property("article:author"),
            date: document.meta_property("article:published_time"),
            domain: netloc(url),
        }
    }
}

/// An empty value serializes as `{}`; otherwise every field is present, `null`
/// when unknown.
impl Serialize for SourceMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_struct("SourceMetadata", 0)?.end();
        }

        let mut state = serializer.serialize_struct("SourceMetadata", 5)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("author", &self.author)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("domain", &self.domain)?;
        state.end()
    }
}

/// Fetches `url` once and scrapes its metadata. Any failure is logged and yields
/// an empty value. Non-success statuses are still parsed.
pub async fn collect_metadata<F: PageFetcher>(fetcher: &F, url: Option<&str>) -> SourceMetadata {
    let Some(raw) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return SourceMetadata::default();
    };

    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(url = raw, error = %e, "Error extracting metadata: unparseable URL");
            return SourceMetadata::default();
        }
    };

    match fetcher.fetch(&parsed).await {
        Ok(page) => {
            let metadata = SourceMetadata::from_page(&parsed, &HtmlDocument::parse(&page.body));
            debug!(url = %parsed, status = page.status, ?metadata, "Collected source metadata");
            metadata
        }
        Err(e) => {
            error!(
                url = %parsed,
                category = e.category().as_str(),
                error = %e,
                "Error extracting metadata"
            );
            SourceMetadata::default()
        }
    }
}
