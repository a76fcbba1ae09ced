//! Observability HTTP Routes
//!
//! Health check endpoint and the request logging middleware.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::not_found_handler;
use super::movie_routes::MoviesState;
use crate::observability::{Event, Logger};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub movies: usize,
}

/// Health check route
pub fn health_routes(state: Arc<MoviesState>) -> Router {
    Router::new()
        .route("/health", get(health_handler).fallback(not_found_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<MoviesState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        movies: state.movie_count().await,
    };

    (StatusCode::OK, Json(response))
}

/// Logs one `HTTP_REQUEST` line per completed request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = started.elapsed().as_millis().to_string();
    let fields = [
        ("method", method.as_str()),
        ("path", path.as_str()),
        ("status", status.as_str()),
        ("duration_ms", elapsed.as_str()),
    ];

    if status.is_server_error() {
        Logger::error(Event::HttpRequest, &fields);
    } else {
        Logger::info(Event::HttpRequest, &fields);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            movies: 3,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["movies"], 3);
    }
}
