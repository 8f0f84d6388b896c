use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::constants::{FACTLENS_STATUS_ERROR, FACTLENS_STATUS_HEADER};
use crate::metadata::FetchError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidRequest(String),

    /// The page behind a preview URL could not be fetched.
    #[error(transparent)]
    Upstream(#[from] FetchError),

    #[error("{0}")]
    Internal(String),
}

impl From<AnalysisError> for GatewayError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyContent => GatewayError::InvalidRequest(err.to_string()),
            AnalysisError::Classifier(e) => GatewayError::Internal(e.to_string()),
            AnalysisError::Internal { reason } => GatewayError::Internal(reason),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message, factlens_status) = match &self {
            GatewayError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string(), "invalid_request")
            }
            GatewayError::Upstream(e) => (StatusCode::BAD_REQUEST, e.user_message(), "upstream_error"),
            GatewayError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
                "internal_error",
            ),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            FACTLENS_STATUS_HEADER,
            HeaderValue::from_str(factlens_status).unwrap_or(HeaderValue::from_static(FACTLENS_STATUS_ERROR)),
        );

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
