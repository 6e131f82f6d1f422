//! Submission HTTP Routes
//!
//! `POST /submit`. The body is taken as raw bytes so that content-type and
//! parse failures produce the same JSON error shape as validation failures.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use super::errors::ApiError;
use super::run_blocking;
use crate::submission::SubmissionHandler;

// ==================
// Shared State
// ==================

/// State shared by submission and data routes
#[derive(Debug, Clone)]
pub struct SubmissionState {
    pub handler: SubmissionHandler,
}

impl SubmissionState {
    pub fn new(handler: SubmissionHandler) -> Self {
        Self { handler }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: u64,
    pub message: String,
}

// ==================
// Submission Routes
// ==================

/// Create submission routes
pub fn submission_routes(state: Arc<SubmissionState>) -> Router {
    Router::new()
        .route("/submit", post(submit_handler))
        .with_state(state)
}

async fn submit_handler(
    State(state): State<Arc<SubmissionState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let receipt = run_blocking(move || {
        state.handler.submit(&body, content_type.as_deref())
    })
    .await??;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            id: receipt.id,
            message: "Data received successfully".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_serialization() {
        let response = SubmitResponse {
            success: true,
            id: 12,
            message: "Data received successfully".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["id"], 12);
    }
}
