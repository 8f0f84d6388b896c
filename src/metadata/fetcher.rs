use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_METADATA_USER_AGENT, PREVIEW_ACCEPT, PREVIEW_ACCEPT_LANGUAGE,
    PREVIEW_USER_AGENT,
};

/// Failure category of a page fetch, each with its own user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorCategory {
    InvalidUrl,
    Ssl,
    Connection,
    Timeout,
    Request,
}

impl FetchErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorCategory::InvalidUrl => "invalid_url",
            FetchErrorCategory::Ssl => "ssl",
            FetchErrorCategory::Connection => "connection",
            FetchErrorCategory::Timeout => "timeout",
            FetchErrorCategory::Request => "request",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid URL '{url}'")]
    InvalidUrl { url: String },

    #[error("TLS failure fetching {url}: {reason}")]
    Ssl { url: String, reason: String },

    #[error("could not connect to {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

impl FetchError {
    pub fn category(&self) -> FetchErrorCategory {
        match self {
            FetchError::InvalidUrl { .. } => FetchErrorCategory::InvalidUrl,
            FetchError::Ssl { .. } => FetchErrorCategory::Ssl,
            FetchError::Connection { .. } => FetchErrorCategory::Connection,
            FetchError::Timeout { .. } => FetchErrorCategory::Timeout,
            FetchError::Request { .. } => FetchErrorCategory::Request,
        }
    }

    /// Message shown to API clients.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidUrl { .. } => "Invalid URL format".to_string(),
            FetchError::Ssl { .. } => "SSL certificate verification failed".to_string(),
            FetchError::Connection { .. } => "Could not connect to the URL".to_string(),
            FetchError::Timeout { .. } => "Request timed out".to_string(),
            FetchError::Request { reason, .. } => format!("Error fetching URL: {reason}"),
        }
    }

    /// Sorts a reqwest failure into a category. TLS problems surface as connect
    /// errors, so the source chain is inspected for them first.
    pub fn from_reqwest(url: &Url, err: reqwest::Error) -> Self {
        let url = url.to_string();
        let reason = error_chain(&err);

        if err.is_connect() || err.is_request() {
            if looks_like_tls(&reason) {
                return FetchError::Ssl { url, reason };
            }
            if err.is_connect() {
                return FetchError::Connection { url, reason };
            }
        }
        if err.is_timeout() {
            return FetchError::Timeout { url };
        }
        FetchError::Request { url, reason }
    }
}

fn error_chain(err: &reqwest::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        parts.push(inner.to_string());
        source = inner.source();
    }
    parts.join(": ")
}

fn looks_like_tls(reason: &str) -> bool {
    let reason = reason.to_ascii_lowercase();
    [
        "certificate",
        "tls",
        "ssl",
        "handshake",
        "wrong version number",
        "corrupt message",
    ]
        .iter()
        .any(|needle| reason.contains(needle))
}

/// A fetched page. `url` is the final URL after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: Url,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-attempt page download. Never retries.
pub trait PageFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Request identity presented to remote sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchProfile {
    /// Bare user agent only.
    Plain,
    /// Desktop browser user agent plus `Accept`/`Accept-Language`.
    Browser,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub profile: FetchProfile,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::metadata(DEFAULT_FETCH_TIMEOUT, DEFAULT_METADATA_USER_AGENT)
    }
}

impl FetchConfig {
    pub fn metadata(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
            profile: FetchProfile::Plain,
        }
    }

    pub fn browser(timeout: Duration) -> Self {
        Self {
            timeout,
            user_agent: PREVIEW_USER_AGENT.to_string(),
            profile: FetchProfile::Browser,
        }
    }
}

/// reqwest-backed fetcher. Certificate verification is always on.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        if config.profile == FetchProfile::Browser {
            headers.insert(ACCEPT, HeaderValue::from_static(PREVIEW_ACCEPT));
            headers.insert(
                ACCEPT_LANGUAGE,
                HeaderValue::from_static(PREVIEW_ACCEPT_LANGUAGE),
            );
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .no_proxy()
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        debug!(url = %final_url, status, bytes = body.len(), "Fetched page");

        Ok(FetchedPage {
            url: final_url,
            status,
            body,
        })
    }
}

/// In-memory fetcher keyed by URL, for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Default, Clone)]
pub struct MockPageFetcher {
    pages: std::sync::Arc<
        std::sync::RwLock<std::collections::HashMap<String, Result<FetchedPage, FetchError>>>,
    >,
    requests: std::sync::Arc<std::sync::RwLock<Vec<String>>>,
}

#[cfg(any(test, feature = "mock"))]
impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(url: &str) -> String {
        Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string())
    }

    /// Serves `body` with a 200 status at `url`.
    pub fn with_page(self, url: &str, body: impl Into<String>) -> Self {
        self.insert_page(url, 200, body);
        self
    }

    pub fn with_error(self, url: &str, error: FetchError) -> Self {
        self.insert_error(url, error);
        self
    }

    pub fn insert_page(&self, url: &str, status: u16, body: impl Into<String>) {
        let key = Self::key(url);
        let page = Url::parse(&key)
            .map(|parsed| FetchedPage {
                url: parsed,
                status,
                body: body.into(),
            })
            .map_err(|_| FetchError::InvalidUrl { url: key.clone() });
        self.pages
            .write()
            .expect("lock poisoned")
            .insert(key, page);
    }

    pub fn insert_error(&self, url: &str, error: FetchError) {
        self.pages
            .write()
            .expect("lock poisoned")
            .insert(Self::key(url), Err(error));
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().expect("lock poisoned").clone()
    }
}

#[cfg(any(test, feature = "mock"))]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let key = url.to_string();
        self.requests
            .write()
            .expect("lock poisoned")
            .push(key.clone());

        self.pages
            .read()
            .expect("lock poisoned")
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Connection {
                    url: key.clone(),
                    reason: "no mock page registered".to_string(),
                })
            })
    }
}
