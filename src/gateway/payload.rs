use serde::{Deserialize, Serialize};

use crate::analysis::ClassificationResult;
use crate::engine::Label;
use crate::metadata::SourceMetadata;

#[derive(Deserialize, Debug, Clone)]
pub struct AnalysisRequest {
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Accepted for compatibility; every analysis already runs the full pipeline.
    #[serde(default)]
    pub advanced_analysis: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub classification: Label,
    pub confidence_score: f64,
    pub country_of_origin: String,
    pub is_verified: bool,
    pub explanation: String,
    #[serde(default)]
    pub source_metadata: SourceMetadata,
}

impl From<ClassificationResult> for AnalysisResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            classification: result.label,
            confidence_score: result.confidence,
            country_of_origin: result.country,
            is_verified: result.is_verified,
            explanation: result.explanation,
            source_metadata: result.metadata,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PreviewQuery {
    pub url: String,
}
