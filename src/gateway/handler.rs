use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};

use crate::analysis::{AnalysisError, Article};
use crate::classifier::TextClassifier;
use crate::constants::{
    FACTLENS_STATUS_ANALYZED, FACTLENS_STATUS_HEADER, FACTLENS_STATUS_PREVIEWED,
};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{AnalysisRequest, AnalysisResponse, PreviewQuery};
use crate::gateway::state::HandlerState;
use crate::metadata::PageFetcher;

#[instrument(
    skip(state, payload),
    fields(request_id = %uuid::Uuid::new_v4(), has_url = tracing::field::Empty)
)]
pub async fn analyze_handler<C, F>(
    State(state): State<HandlerState<C, F>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    C: TextClassifier,
    F: PageFetcher,
{
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected malformed request body");
        GatewayError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    let request: AnalysisRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;
    tracing::Span::current().record("has_url", request.url.is_some());

    let article = Article::new(request.content, request.url).map_err(|e| {
        warn!(error = %e, "Rejected analysis request");
        GatewayError::from(e)
    })?;

    let result = state
        .analyzer
        .analyze(&article, state.metadata_fetcher.as_ref())
        .await
        .map_err(|e| {
            log_analysis_failure(&e);
            GatewayError::from(e)
        })?;

    info!(
        label = %result.label,
        confidence = result.confidence,
        country = %result.country,
        verified = result.is_verified,
        "Analysis complete"
    );

    Ok(make_response(
        FACTLENS_STATUS_ANALYZED,
        Json(AnalysisResponse::from(result)),
    ))
}

#[instrument(skip(state, query), fields(url = tracing::field::Empty))]
pub async fn preview_handler<C, F>(
    State(state): State<HandlerState<C, F>>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    C: TextClassifier,
    F: PageFetcher,
{
    let Query(query) = query.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("Invalid query: {}", rejection.body_text()))
    })?;
    tracing::Span::current().record("url", query.url.as_str());
    let preview = state.preview.preview(&query.url).await?;

    Ok(make_response(FACTLENS_STATUS_PREVIEWED, Json(preview)))
}

fn log_analysis_failure(err: &AnalysisError) {
    if err.is_client_error() {
        warn!(error = %err, "Analysis rejected");
    } else {
        error!(error = ?err, "Analysis failed");
    }
}

pub(crate) fn make_response(status: &'static str, body: impl IntoResponse) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(FACTLENS_STATUS_HEADER, HeaderValue::from_static(status));

    (StatusCode::OK, headers, body).into_response()
}
