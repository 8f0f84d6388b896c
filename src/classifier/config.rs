use std::path::PathBuf;

pub const MAX_SEQ_LEN: usize = 512;

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    /// `None` runs the lexical stub.
    pub model_path: Option<PathBuf>,

    pub max_seq_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            max_seq_len: MAX_SEQ_LEN,
        }
    }
}

impl ClassifierConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_seq_len == 0 {
            return Err("max_seq_len must be positive".to_string());
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        Ok(())
    }

    pub fn from_env() -> Self {
        let model_path = std::env::var("FACTLENS_CLASSIFIER_PATH")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let max_seq_len = std::env::var("FACTLENS_CLASSIFIER_MAX_SEQ_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(MAX_SEQ_LEN);

        Self {
            model_path,
            max_seq_len,
        }
    }
}
