//! HTTP gateway (Axum) for article analysis and link previews.
//!
//! This module is primarily used by the `factlens` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{analyze_handler, preview_handler};
pub use payload::{AnalysisRequest, AnalysisResponse, PreviewQuery};
pub use state::HandlerState;

use crate::classifier::TextClassifier;
use crate::constants::{
    FACTLENS_STATUS_HEADER, FACTLENS_STATUS_HEALTHY, FACTLENS_STATUS_NOT_READY,
    FACTLENS_STATUS_READY,
};
use crate::metadata::PageFetcher;

pub fn create_router_with_state<C, F>(state: HandlerState<C, F>) -> Router
where
    C: TextClassifier,
    F: PageFetcher,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/preview-url", get(preview_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub analyzer: &'static str,
    pub classifier_mode: &'static str,
    pub lexicon_version: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        FACTLENS_STATUS_HEADER,
        HeaderValue::from_static(FACTLENS_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<C, F>(State(state): State<HandlerState<C, F>>) -> Response
where
    C: TextClassifier,
    F: PageFetcher,
{
    let analyzer = &state.analyzer;
    let is_ready = analyzer.is_serving();

    let components = ComponentStatus {
        http: FACTLENS_STATUS_READY,
        analyzer: if is_ready {
            FACTLENS_STATUS_READY
        } else {
            FACTLENS_STATUS_NOT_READY
        },
        classifier_mode: if analyzer.classifier().is_model_loaded() {
            "model"
        } else {
            "stub"
        },
        lexicon_version: analyzer.lexicon().version().to_string(),
    };

    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready {
        "ok"
    } else {
        FACTLENS_STATUS_NOT_READY
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        FACTLENS_STATUS_HEADER,
        HeaderValue::from_static(if is_ready {
            FACTLENS_STATUS_READY
        } else {
            FACTLENS_STATUS_NOT_READY
        }),
    );

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
