//! Factlens library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Pipeline
//! - [`Analyzer`], [`Article`], [`ClassificationResult`] - End-to-end analysis
//! - [`DecisionEngine`], [`DecisionPolicy`], [`Verdict`] - Rule cascade and thresholds
//! - [`explain`] - Human-readable rationale
//!
//! ## Signals & Lexicon
//! - [`Lexicon`], [`Category`] - Immutable indicator tables
//! - [`SignalBundle`], [`extract_signals`] - Pure signal extraction
//!
//! ## Classifier
//! - [`TextClassifier`], [`SentimentClassifier`], [`ClassifierConfig`]
//!
//! ## Source Pages
//! - [`PageFetcher`], [`HttpFetcher`], [`SourceMetadata`] - Best-effort metadata
//! - [`PreviewService`], [`LinkPreview`] - Link previews
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod engine;
pub mod explain;
pub mod gateway;
pub mod lexicon;
pub mod metadata;
pub mod preview;
pub mod signals;

pub use analysis::{AnalysisError, Analyzer, Article, ClassificationResult};
#[cfg(any(test, feature = "mock"))]
pub use classifier::FixedClassifier;
pub use classifier::{
    ClassifierConfig, ClassifierError, ClassifierOutput, SentimentClassifier, SentimentLabel,
    TextClassifier,
};
pub use config::{Config, ConfigError};
pub use constants::{
    FACTLENS_STATUS_ANALYZED, FACTLENS_STATUS_ERROR, FACTLENS_STATUS_HEADER,
    FACTLENS_STATUS_HEALTHY, FACTLENS_STATUS_NOT_READY, FACTLENS_STATUS_PREVIEWED,
    FACTLENS_STATUS_READY,
};
pub use engine::{Branch, DecisionEngine, DecisionPolicy, DecisionTrace, Label, Verdict};
pub use explain::explain;
pub use lexicon::{Category, LEXICON_VERSION, Lexicon};
#[cfg(any(test, feature = "mock"))]
pub use metadata::MockPageFetcher;
pub use metadata::{
    FetchConfig, FetchError, FetchErrorCategory, FetchedPage, HttpFetcher, PageFetcher,
    SourceMetadata, collect_metadata,
};
pub use preview::{LinkPreview, PreviewService, normalize_url};
pub use signals::{SignalBundle, extract_signals};
