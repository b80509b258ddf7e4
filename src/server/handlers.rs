//! Route handlers

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::error::ApiError;
use super::state::AppState;
use crate::models::Analysis;

/// Feedback form served at `/`
const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Body of `POST /analyze`. A missing `feedback` key reads as empty.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub lexicon_entries: usize,
}

pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Score one piece of feedback.
///
/// The body is parsed by hand instead of through the `Json` extractor so
/// every rejection (bad JSON, wrong types, missing content type) comes back
/// in the same `{"error": ...}` shape.
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Analysis>, ApiError> {
    let request: FeedbackRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected payload: {}", e);
        ApiError::MalformedPayload
    })?;

    if request.feedback.trim().is_empty() {
        return Err(ApiError::NoFeedback);
    }

    let analysis = state.scorer.analyze(&request.feedback);
    debug!(
        sentiment = %analysis.sentiment,
        compound = analysis.scores.compound,
        chars = request.feedback.len(),
        "analyzed feedback"
    );
    Ok(Json(analysis))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        lexicon_entries: state.scorer.lexicon().len(),
    })
}
