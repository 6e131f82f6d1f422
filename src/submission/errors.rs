//! # Submission Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for submission and read-path operations
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Submission and lookup errors
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not a JSON object, or the content type is wrong
    #[error("{0}")]
    InvalidInput(String),

    /// Required fields absent or blank, all of them listed
    #[error("Missing required fields")]
    MissingFields(Vec<String>),

    /// A present field could not be coerced
    #[error("Validation error: {message}")]
    ValidationError { field: String, message: String },

    /// No record with this id
    #[error("Data not found")]
    NotFound(u64),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Record validated but could not be persisted
    #[error("Failed to save data")]
    StorageError(#[from] StoreError),

    /// Anything else; the detail is for logs only
    #[error("Internal server error")]
    Internal(String),
}

impl SubmissionError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        SubmissionError::InvalidInput(msg.into())
    }

    pub fn validation(field: &str, msg: impl Into<String>) -> Self {
        SubmissionError::ValidationError {
            field: field.to_string(),
            message: msg.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            SubmissionError::InvalidInput(_) => 400,
            SubmissionError::MissingFields(_) => 400,
            SubmissionError::ValidationError { .. } => 400,
            SubmissionError::NotFound(_) => 404,
            SubmissionError::StorageError(_) => 500,
            SubmissionError::Internal(_) => 500,
        }
    }

    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::InvalidInput(_) => "invalid_input",
            SubmissionError::MissingFields(_) => "missing_fields",
            SubmissionError::ValidationError { .. } => "validation_error",
            SubmissionError::NotFound(_) => "not_found",
            SubmissionError::StorageError(_) => "storage_error",
            SubmissionError::Internal(_) => "internal",
        }
    }

    /// Full detail, including causes hidden from clients
    pub fn detail(&self) -> String {
        match self {
            SubmissionError::MissingFields(fields) => {
                format!("Missing required fields: {}", fields.join(", "))
            }
            SubmissionError::NotFound(id) => format!("Data not found: id={}", id),
            SubmissionError::StorageError(e) => format!("Failed to save data: {}", e),
            SubmissionError::Internal(msg) => format!("Internal server error: {}", msg),
            other => other.to_string(),
        }
    }
}
