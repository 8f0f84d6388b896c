//! Link preview service.
//!
//! Unlike metadata collection, preview failures are surfaced: each
//! [`FetchError`] category carries its own client-facing message.


use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use crate::metadata::{FetchError, FetchedPage, HtmlDocument, PageFetcher};
use crate::signals::netloc;

/// Card data for rendering a link preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreview {
    /// Never empty: falls back to the domain.
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub domain: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Adds `https://` when no http(s) scheme is present and requires a host.
pub fn normalize_url(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    let invalid = || FetchError::InvalidUrl {
        url: raw.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|_| invalid())?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(invalid()),
    }
}

/// Builds a preview from a fetched page.
///
/// Title: `og:title`, then `<title>`, then the first `<h1>`, then the domain.
/// Description: `og:description`, then `<meta name="description">`. A relative
/// `og:image` is resolved against the page's final URL.
pub fn build_preview(requested: &Url, page: &FetchedPage) -> LinkPreview {
    let document = HtmlDocument::parse(&page.body);
    let domain = netloc(requested);

    let title = document
        .meta_property("og:title")
        .or_else(|| document.title().map(str::to_string))
        .or_else(|| document.first_h1().map(str::to_string))
        .or_else(|| domain.clone())
        .unwrap_or_else(|| requested.to_string());

    let description = document
        .meta_property("og:description")
        .or_else(|| document.meta_name("description"));

    let image = document
        .meta_property("og:image")
        .map(|image| absolute_image_url(&page.url, image));

    LinkPreview {
        title,
        description,
        image,
        domain,
        author: document.meta_name("author"),
        date: document.meta_property("article:published_time"),
    }
}

fn absolute_image_url(base: &Url, image: String) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        return image;
    }
    base.join(&image)
        .map(|joined| joined.to_string())
        .unwrap_or(image)
}

#[derive(Debug, Clone)]
pub struct PreviewService<F> {
    fetcher: F,
}

impl<F: PageFetcher> PreviewService<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Normalizes `raw_url`, fetches it once and builds the preview.
    /// Non-success HTTP statuses are reported as [`FetchError::Request`].
    pub async fn preview(&self, raw_url: &str) -> Result<LinkPreview, FetchError> {
        let result = self.fetch_preview(raw_url).await;
        if let Err(ref e) = result {
            error!(
                url = raw_url,
                category = e.category().as_str(),
                error = %e,
                "Preview fetch failed"
            );
        }
        result
    }

    async fn fetch_preview(&self, raw_url: &str) -> Result<LinkPreview, FetchError> {
        let url = normalize_url(raw_url)?;
        let page = self.fetcher.fetch(&url).await?;

        if !page.is_success() {
            let reason = reqwest::StatusCode::from_u16(page.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown");
            return Err(FetchError::Request {
                url: url.to_string(),
                reason: format!("{} {} for url: {}", page.status, reason, url),
            });
        }

        let preview = build_preview(&url, &page);
        info!(url = %url, title = %preview.title, "Generated link preview");
        Ok(preview)
    }
}
