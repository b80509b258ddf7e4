//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Request failures, rendered as `{"error": "<message>"}`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("No feedback provided")]
    NoFeedback,

    #[error("Malformed payload")]
    MalformedPayload,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoFeedback | ApiError::MalformedPayload => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
