//! # HTTP Server
//!
//! Combines the movie and health routers, the CORS allow-list, request
//! logging, and the HTML 404 fallback into one Axum server.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::config::HttpServerConfig;
use super::errors::not_found_handler;
use super::movie_routes::{movie_routes, MoviesState};
use super::observability_routes::{health_routes, log_requests};
use crate::observability::{Event, Logger};
use crate::store::MovieStore;

/// HTTP server for the movie catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that owns `store` for its whole lifetime
    pub fn new(config: HttpServerConfig, store: MovieStore) -> Self {
        let state = Arc::new(MoviesState::new(store));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<MoviesState>) -> Router {
        Router::new()
            .merge(health_routes(state.clone()))
            .merge(movie_routes(state))
            .fallback(not_found_handler)
            .layer(middleware::from_fn(log_requests))
            .layer(cors_layer(&config.cors_origins))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let local = listener.local_addr()?;

        Logger::info(
            Event::ServerStarted,
            &[
                ("addr", &local.to_string()),
                ("url", &format!("http://localhost:{}/movies", local.port())),
            ],
        );

        axum::serve(listener, self.router).await
    }
}

/// Requests without an `Origin` header pass through untouched; listed
/// origins get `Access-Control-Allow-Origin`, others get nothing.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
