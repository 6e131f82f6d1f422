//! Observability HTTP Routes

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::observability::{Event, Logger};
use crate::submission::sanitize::format_timestamp;

/// Name reported by the health check
pub const SERVICE_NAME: &str = "PWA Offline Data Collector API";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    Logger::trace(Event::HealthChecked, &[]);

    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: format_timestamp(Utc::now()),
        service: SERVICE_NAME.to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            timestamp: "2024-01-01T00:00:00.000000Z".to_string(),
            service: SERVICE_NAME.to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], SERVICE_NAME);
    }
}
