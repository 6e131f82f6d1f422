//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers under `/api`.

use std::any::Any;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::data_routes::data_routes;
use super::errors::ApiError;
use super::observability_routes::health_routes;
use super::submission_routes::{submission_routes, SubmissionState};
use crate::observability::{log_event, Event, Logger};
use crate::submission::SubmissionHandler;

/// HTTP server for the collector API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that commits submissions through `handler`
    pub fn new(config: HttpServerConfig, handler: SubmissionHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, handler: SubmissionHandler) -> Router {
        let state = Arc::new(SubmissionState::new(handler));

        let api = Router::new()
            .merge(health_routes())
            .merge(submission_routes(state.clone()))
            .merge(data_routes(state));

        Router::new()
            .nest("/api", api)
            .fallback(not_found_handler)
            .layer(cors_layer(config))
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until `shutdown` resolves
    pub async fn start<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?.to_string();
        Logger::info(Event::Serving, &[("addr", &local_addr)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_allows_any() {
        CorsLayer::new()
            .allow_origin(cors::Any)
            .allow_methods(cors::Any)
            .allow_headers(cors::Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(cors::Any)
            .allow_headers(cors::Any)
    }
}

async fn not_found_handler() -> ApiError {
    ApiError::EndpointNotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonFileStore, DEFAULT_DATA_FILE};
    use tempfile::TempDir;

    fn handler(temp: &TempDir) -> SubmissionHandler {
        let store = JsonFileStore::open(temp.path(), DEFAULT_DATA_FILE).unwrap();
        SubmissionHandler::new(Arc::new(store))
    }

    #[test]
    fn test_server_with_custom_port() {
        let temp = TempDir::new().unwrap();
        let server = HttpServer::new(HttpServerConfig::with_port(8080), handler(&temp));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let temp = TempDir::new().unwrap();
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, handler(&temp)).router();
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), 500);
    }
}
