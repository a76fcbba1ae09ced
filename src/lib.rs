//! movie-catalog - an in-memory movie catalog served over HTTP
//!
//! - `schema`: movie schema and validator (untyped JSON in, typed movie out)
//! - `store`: ordered in-memory collection with id-based mutation
//! - `http_server`: axum routes, CORS, request logging
//! - `observability`: structured JSON logging
//! - `cli`: `serve` and `validate` commands

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
