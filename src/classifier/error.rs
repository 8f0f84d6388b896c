use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load classifier model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("{device} device unavailable: {reason}")]
    DeviceUnavailable { device: String, reason: String },

    #[error("classifier inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid classifier configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ClassifierError {
    /// Returns `true` for errors that can only happen while loading the model.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ClassifierError::ModelNotFound { .. }
                | ClassifierError::ModelLoadFailed { .. }
                | ClassifierError::DeviceUnavailable { .. }
                | ClassifierError::InvalidConfig { .. }
        )
    }
}

impl From<candle_core::Error> for ClassifierError {
    fn from(err: candle_core::Error) -> Self {
        ClassifierError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ClassifierError {
    fn from(err: std::io::Error) -> Self {
        ClassifierError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
