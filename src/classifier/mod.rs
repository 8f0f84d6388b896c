//! Text classifier adapter.
//!
//! The decision engine only needs `classify(text) -> {label, score}`; the
//! [`TextClassifier`] trait is that seam. [`SentimentClassifier`] is the production
//! implementation: a BERT or DistilBERT sequence classifier (candle) when a model
//! directory is configured, or a deterministic lexical stub otherwise.
//!
//! Loading is done once at startup and a load failure is fatal. Per-call failures
//! surface as [`ClassifierError`] for that request only.

pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
pub mod error;
/// BERT / DistilBERT sequence-classification heads.
pub mod model;
mod stub;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::{ClassifierConfig, MAX_SEQ_LEN};
pub use error::ClassifierError;

use candle_core::Tensor;
use serde::{Deserialize, Serialize};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use device::select_device;
use model::SequenceClassifier;
use utils::load_truncating_tokenizer;

/// Sentiment label reported by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classifier prediction. `score` is the probability of `label`, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub label: SentimentLabel,
    pub score: f64,
}

impl ClassifierOutput {
    /// Creates an output, clamping `score` into `[0, 1]` (NaN becomes `0`).
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        };
        Self { label, score }
    }

    pub fn positive(score: f64) -> Self {
        Self::new(SentimentLabel::Positive, score)
    }

    pub fn negative(score: f64) -> Self {
        Self::new(SentimentLabel::Negative, score)
    }
}

/// A text classifier shared read-only across concurrent requests.
///
/// Implementations are called from the blocking thread pool; `classify` may be
/// CPU-heavy.
pub trait TextClassifier: Send + Sync + 'static {
    fn classify(&self, text: &str) -> Result<ClassifierOutput, ClassifierError>;

    /// `true` when backed by a real model rather than a stub.
    fn is_model_loaded(&self) -> bool;
}

pub struct SentimentClassifier {
    device: candle_core::Device,
    config: ClassifierConfig,
    model: Option<SequenceClassifier>,
    tokenizer: Option<Tokenizer>,
}

impl std::fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.model.is_some())
            .finish()
    }
}

impl SentimentClassifier {
    pub fn load(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        if let Err(msg) = config.validate() {
            return Err(ClassifierError::InvalidConfig { reason: msg });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for classifier");

        let Some(model_path) = config.model_path.clone() else {
            info!("No classifier model path configured, operating in stub mode");
            return Ok(Self {
                device,
                config,
                model: None,
                tokenizer: None,
            });
        };

        if !model_path.exists() {
            return Err(ClassifierError::ModelNotFound { path: model_path });
        }

        for required in ["config.json", "model.safetensors", "tokenizer.json"] {
            if !model_path.join(required).exists() {
                return Err(ClassifierError::ModelLoadFailed {
                    reason: format!("Missing {} in {}", required, model_path.display()),
                });
            }
        }

        info!(model_path = %model_path.display(), "Loading classifier model");

        let model = SequenceClassifier::load(&model_path, &device).map_err(|e| {
            ClassifierError::ModelLoadFailed {
                reason: format!("Failed to load classifier model: {}", e),
            }
        })?;

        let tokenizer = load_truncating_tokenizer(&model_path, config.max_seq_len)?;

        info!(
            architecture = model.architecture().as_str(),
            num_labels = model.labels().len(),
            max_seq_len = config.max_seq_len,
            "Classifier model loaded successfully"
        );

        Ok(Self {
            device,
            config,
            model: Some(model),
            tokenizer: Some(tokenizer),
        })
    }

    pub fn stub() -> Result<Self, ClassifierError> {
        Self::load(ClassifierConfig::stub())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn device(&self) -> &candle_core::Device {
        &self.device
    }

    fn classify_with_model(
        &self,
        model: &SequenceClassifier,
        tokenizer: &Tokenizer,
        text: &str,
    ) -> Result<ClassifierOutput, ClassifierError> {
        let tokens =
            tokenizer
                .encode(text, true)
                .map_err(|e| ClassifierError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let token_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(tokens.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = model.forward(&token_ids, &type_ids, &attention_mask)?;
        let probs = candle_nn::ops::softmax(&logits, candle_core::D::Minus1)?
            .squeeze(0)?
            .to_vec1::<f32>()?;

        let (idx, prob) = probs
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f32)>, (i, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
            .ok_or_else(|| ClassifierError::InferenceFailed {
                reason: "classifier produced no logits".to_string(),
            })?;

        let label = sentiment_for_label(idx, model.labels().get(idx));
        debug!(label = %label, score = prob, token_count = tokens.len(), "Classified text");

        Ok(ClassifierOutput::new(label, f64::from(prob)))
    }
}

impl TextClassifier for SentimentClassifier {
    fn classify(&self, text: &str) -> Result<ClassifierOutput, ClassifierError> {
        if let (Some(model), Some(tokenizer)) = (&self.model, &self.tokenizer) {
            return self.classify_with_model(model, tokenizer, text);
        }

        let (negative, score) = stub::lexical_sentiment(text);
        let label = if negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };
        debug!(label = %label, score = score, "Classified text (stub)");

        Ok(ClassifierOutput::new(label, score))
    }

    fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }
}

/// Maps a class index to a sentiment, preferring the model's label names.
///
/// Unnamed labels (`LABEL_0`, `LABEL_1`) follow the SST-2 convention: index 0 is
/// negative.
pub(crate) fn sentiment_for_label(idx: usize, name: Option<&str>) -> SentimentLabel {
    let name = name.map(|n| n.to_ascii_uppercase());
    match name.as_deref() {
        Some(n) if n.starts_with("NEG") => SentimentLabel::Negative,
        Some(n) if n.starts_with("POS") => SentimentLabel::Positive,
        _ if idx == 0 => SentimentLabel::Negative,
        _ => SentimentLabel::Positive,
    }
}

/// Classifier returning a fixed outcome, for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    outcome: Result<ClassifierOutput, String>,
}

#[cfg(any(test, feature = "mock"))]
impl FixedClassifier {
    pub fn new(output: ClassifierOutput) -> Self {
        Self {
            outcome: Ok(output),
        }
    }

    /// A classifier whose every call fails with `InferenceFailed`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl TextClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> Result<ClassifierOutput, ClassifierError> {
        self.outcome
            .clone()
            .map_err(|reason| ClassifierError::InferenceFailed { reason })
    }

    fn is_model_loaded(&self) -> bool {
        false
    }
}
