//! # HTTP Error Mapping
//!
//! Every error leaves the server as `{error, code}` JSON, plus
//! `missing_fields` or `field` where the client can act on them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{Event, Logger};
use crate::submission::SubmissionError;

/// Errors returned by route handlers
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Domain error from submission or lookup
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// No route matches the request
    #[error("Endpoint not found")]
    EndpointNotFound,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Submission(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Wrap an unexpected failure
    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Submission(SubmissionError::Internal(msg.into()))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let (missing_fields, field) = match err {
            ApiError::Submission(SubmissionError::MissingFields(fields)) => {
                (Some(fields.clone()), None)
            }
            ApiError::Submission(SubmissionError::ValidationError { field, .. }) => {
                (None, Some(field.clone()))
            }
            _ => (None, None),
        };

        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            missing_fields,
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Submission(e @ SubmissionError::Internal(_)) = &self {
            Logger::error(Event::InternalError, &[("error", &e.detail())]);
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::EndpointNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(SubmissionError::NotFound(3)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(SubmissionError::invalid_input("Empty request body")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_fields_body() {
        let err = ApiError::from(SubmissionError::MissingFields(vec![
            "title".to_string(),
            "category".to_string(),
        ]));
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(json["error"], "Missing required fields");
        assert_eq!(json["code"], 400);
        assert_eq!(json["missing_fields"], serde_json::json!(["title", "category"]));
        assert!(json.get("field").is_none());
    }

    #[test]
    fn test_internal_details_not_leaked() {
        let err = ApiError::from(SubmissionError::from(StoreError::Io {
            path: "/srv/data/submissions.json".to_string(),
            message: "No space left on device".to_string(),
        }));
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(json["error"], "Failed to save data");
        assert!(!json.to_string().contains("/srv/data"));

        let json = serde_json::to_value(ErrorResponse::from(&ApiError::internal("stack"))).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
