use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::classifier::TextClassifier;
use crate::metadata::PageFetcher;
use crate::preview::PreviewService;

/// Shared, read-only handler state. Cloning is cheap.
pub struct HandlerState<C: TextClassifier, F: PageFetcher> {
    pub analyzer: Analyzer<C>,

    /// Fetcher used for best-effort source metadata during analysis.
    pub metadata_fetcher: Arc<F>,

    pub preview: Arc<PreviewService<F>>,
}

impl<C: TextClassifier, F: PageFetcher> Clone for HandlerState<C, F> {
    fn clone(&self) -> Self {
        Self {
            analyzer: self.analyzer.clone(),
            metadata_fetcher: Arc::clone(&self.metadata_fetcher),
            preview: Arc::clone(&self.preview),
        }
    }
}

impl<C: TextClassifier, F: PageFetcher> HandlerState<C, F> {
    pub fn new(analyzer: Analyzer<C>, metadata_fetcher: F, preview_fetcher: F) -> Self {
        Self {
            analyzer,
            metadata_fetcher: Arc::new(metadata_fetcher),
            preview: Arc::new(PreviewService::new(preview_fetcher)),
        }
    }
}
