//! Cross-cutting, shared constants.

use std::time::Duration;

pub const FACTLENS_STATUS_HEADER: &str = "X-Factlens-Status";
pub const FACTLENS_STATUS_HEALTHY: &str = "healthy";
pub const FACTLENS_STATUS_READY: &str = "ready";
pub const FACTLENS_STATUS_NOT_READY: &str = "not_ready";
pub const FACTLENS_STATUS_ANALYZED: &str = "analyzed";
pub const FACTLENS_STATUS_PREVIEWED: &str = "previewed";
pub const FACTLENS_STATUS_ERROR: &str = "error";

/// Single-attempt timeout for metadata and preview fetches.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS);

/// User agent sent by the metadata provider.
pub const DEFAULT_METADATA_USER_AGENT: &str = "Mozilla/5.0";

/// Desktop browser identity used by the preview service; some sites refuse bare agents.
pub const PREVIEW_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const PREVIEW_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const PREVIEW_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
