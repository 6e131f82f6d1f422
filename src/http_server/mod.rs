//! # Collector HTTP Server Module
//!
//! Axum server exposing the submission and read APIs.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check
//! - `POST /api/submit` - Validate and store one record
//! - `GET /api/data` - List all records
//! - `GET /api/data/:id` - Fetch one record
//!
//! Anything else answers 404 `{"error": "Endpoint not found"}`.

pub mod config;
pub mod data_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod submission_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;

/// Run store work off the async executor; a panicking job becomes a 500
pub(crate) async fn run_blocking<T, F>(job: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ApiError::internal(format!("blocking task failed: {}", e)))
}
