use thiserror::Error;

use crate::classifier::ClassifierError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Content was missing or whitespace only.
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("internal analysis error: {reason}")]
    Internal { reason: String },
}

impl AnalysisError {
    /// `true` when the caller sent bad input rather than the service failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::EmptyContent)
    }
}
