//! # Movie HTTP Server Module
//!
//! Axum server exposing the movie catalog.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/movies` - List (optionally `?genre=`) and create
//! - `/movies/:id` - Read, partial update, delete
//!
//! Any other path answers 404 with a small HTML body.

pub mod config;
pub mod errors;
pub mod movie_routes;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, ConfigResult, HttpServerConfig};
pub use errors::{ApiError, ApiResult, MessageResponse, ValidationErrorBody};
pub use movie_routes::MoviesState;
pub use server::HttpServer;
