//! Data HTTP Routes
//!
//! Read-only access to persisted records.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::errors::ApiError;
use super::run_blocking;
use super::submission_routes::SubmissionState;
use crate::store::Record;
use crate::submission::{get_by_id, list_all};

#[derive(Debug, Serialize)]
pub struct DataListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub success: bool,
    pub data: Record,
}

/// Create data routes
pub fn data_routes(state: Arc<SubmissionState>) -> Router {
    Router::new()
        .route("/data", get(list_data_handler))
        .route("/data/:id", get(get_data_handler))
        .with_state(state)
}

/// Parse a path id the way an integer route segment would match: digits only
fn parse_record_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

async fn list_data_handler(
    State(state): State<Arc<SubmissionState>>,
) -> Result<Json<DataListResponse>, ApiError> {
    let list = run_blocking(move || list_all(state.handler.store())).await?;

    Ok(Json(DataListResponse {
        success: true,
        count: list.count,
        data: list.records,
    }))
}

async fn get_data_handler(
    State(state): State<Arc<SubmissionState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<DataResponse>, ApiError> {
    // A non-integer segment does not name a route at all
    let id = parse_record_id(&raw_id).ok_or(ApiError::EndpointNotFound)?;

    let record = run_blocking(move || get_by_id(state.handler.store(), id)).await??;

    Ok(Json(DataResponse {
        success: true,
        data: record,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("1"), Some(1));
        assert_eq!(parse_record_id("007"), Some(7));
        assert_eq!(parse_record_id(""), None);
        assert_eq!(parse_record_id("-1"), None);
        assert_eq!(parse_record_id("+1"), None);
        assert_eq!(parse_record_id("1.5"), None);
        assert_eq!(parse_record_id("abc"), None);
        assert_eq!(parse_record_id("99999999999999999999999"), None);
    }
}
