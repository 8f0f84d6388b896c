use std::path::{Path, PathBuf};
use tokenizers::{Tokenizer, TruncationParams};

use super::error::ClassifierError;

pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// `tokenizer.json` inside a model directory; a path already naming the file
/// is returned as is.
pub fn tokenizer_path(model_path: &Path) -> PathBuf {
    if model_path.file_name().is_some_and(|name| name == TOKENIZER_FILE) {
        model_path.to_path_buf()
    } else {
        model_path.join(TOKENIZER_FILE)
    }
}

/// Loads the tokenizer and truncates every encoding to `max_len` tokens, so
/// articles longer than the model's position table still classify.
pub fn load_truncating_tokenizer(
    model_path: &Path,
    max_len: usize,
) -> Result<Tokenizer, ClassifierError> {
    let path = tokenizer_path(model_path);
    let load_failed = |reason: String| ClassifierError::ModelLoadFailed {
        reason: format!("Failed to load tokenizer from {}: {}", path.display(), reason),
    };

    let mut tokenizer = Tokenizer::from_file(&path).map_err(|e| load_failed(e.to_string()))?;
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_len,
            ..Default::default()
        }))
        .map_err(|e| load_failed(e.to_string()))?;

    Ok(tokenizer)
}
