//! Analysis pipeline.
//!
//! [`Analyzer`] owns the process-wide read-only resources (lexicon, classifier,
//! decision policy) and runs: signals, decision, explanation. The pure core is
//! [`Analyzer::analyze_with_output`]; [`Analyzer::analyze`] adds classifier
//! inference on the blocking pool and the concurrent metadata fetch.

pub mod error;


pub use error::AnalysisError;

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

use crate::classifier::{ClassifierOutput, TextClassifier};
use crate::engine::{DecisionEngine, DecisionPolicy, DecisionTrace, Label};
use crate::explain::explain;
use crate::lexicon::Lexicon;
use crate::metadata::{PageFetcher, SourceMetadata, collect_metadata};
use crate::signals::{SignalBundle, extract_signals};

/// One piece of news text to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    content: String,
    url: Option<String>,
}

impl Article {
    /// Rejects blank content. A blank URL counts as no URL.
    pub fn new(content: impl Into<String>, url: Option<String>) -> Result<Self, AnalysisError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(AnalysisError::EmptyContent);
        }

        let url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Ok(Self { content, url })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: Label,
    /// Percentage in `[0, 100]`.
    pub confidence: f64,
    pub country: String,
    pub is_verified: bool,
    pub explanation: String,
    pub metadata: SourceMetadata,
    pub signals: SignalBundle,
    pub trace: DecisionTrace,
}

pub struct Analyzer<C> {
    lexicon: Arc<Lexicon>,
    classifier: Arc<C>,
    engine: Arc<DecisionEngine>,
    serving: Arc<AtomicBool>,
}

impl<C> Clone for Analyzer<C> {
    fn clone(&self) -> Self {
        Self {
            lexicon: Arc::clone(&self.lexicon),
            classifier: Arc::clone(&self.classifier),
            engine: Arc::clone(&self.engine),
            serving: Arc::clone(&self.serving),
        }
    }
}

impl<C: TextClassifier> Analyzer<C> {
    pub fn new(lexicon: Lexicon, classifier: C, policy: DecisionPolicy) -> Self {
        Self::from_shared(Arc::new(lexicon), Arc::new(classifier), policy)
    }

    pub fn from_shared(lexicon: Arc<Lexicon>, classifier: Arc<C>, policy: DecisionPolicy) -> Self {
        Self {
            lexicon,
            classifier,
            engine: Arc::new(DecisionEngine::new(policy)),
            serving: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Runs signals, decision and explanation for an already classified article.
    /// Pure: identical inputs give identical results.
    pub fn analyze_with_output(
        &self,
        article: &Article,
        classification: ClassifierOutput,
        metadata: SourceMetadata,
    ) -> ClassificationResult {
        let signals = extract_signals(&self.lexicon, article.content(), article.url(), classification);
        let verdict = self.engine.decide(&signals);
        let explanation = explain(&verdict, &signals, &metadata);

        debug!(
            branch = ?verdict.trace.branch,
            rule = verdict.trace.rule,
            refinement = verdict.trace.refinement.unwrap_or("-"),
            label = %verdict.label,
            confidence = verdict.confidence,
            credibility_score = signals.credibility_score,
            "Decision made"
        );

        ClassificationResult {
            label: verdict.label,
            confidence: verdict.confidence,
            country: signals.country.clone(),
            is_verified: signals.is_verified,
            explanation,
            metadata,
            signals,
            trace: verdict.trace,
        }
    }

    /// Classifies `content` on the blocking thread pool.
    pub async fn classify(&self, content: &str) -> Result<ClassifierOutput, AnalysisError> {
        let classifier = Arc::clone(&self.classifier);
        let content = content.to_string();

        tokio::task::spawn_blocking(move || classifier.classify(&content))
            .await
            .map_err(|e| AnalysisError::Internal {
                reason: format!("classifier task failed: {e}"),
            })?
            .map_err(AnalysisError::from)
    }

    /// Full analysis: classification and metadata collection run concurrently.
    /// Metadata failures are absorbed; classifier failures are returned.
    pub async fn analyze<F: PageFetcher>(
        &self,
        article: &Article,
        fetcher: &F,
    ) -> Result<ClassificationResult, AnalysisError> {
        let (classification, metadata) = tokio::join!(
            self.classify(article.content()),
            collect_metadata(fetcher, article.url())
        );

        Ok(self.analyze_with_output(article, classification?, metadata))
    }

    pub fn is_serving(&self) -> bool {
        self.serving.load(Ordering::Acquire)
    }

    /// Marks the analyzer as no longer serving. Readiness turns false; in-flight
    /// requests still complete.
    pub fn teardown(&self) {
        if self.serving.swap(false, Ordering::AcqRel) {
            info!(
                model_loaded = self.classifier.is_model_loaded(),
                "Analyzer torn down"
            );
        }
    }
}
