//! CLI command implementations
//!
//! `serve` boots the catalog in this order:
//! 1. Configuration (file, then `PORT`, then `--port`)
//! 2. Seed catalog load and validation
//! 3. Tokio runtime and HTTP listener
//!
//! `validate` runs the movie schema over one JSON object from stdin.

use std::env;
use std::path::Path;

use serde_json::Value;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Event, Logger};
use crate::schema::{validate_full, validate_partial, ValidationErrors};
use crate::store::MovieStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_response, write_validation_errors};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Validate { partial } => validate(partial),
    }
}

/// Resolve configuration without starting anything
pub fn load_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let config = match config_path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };
    Ok(config.resolve_port(port, env::var("PORT").ok())?)
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path, port)?;
    Logger::info(
        Event::ConfigLoaded,
        &[
            ("addr", &config.socket_addr()),
            ("cors_origins", &config.cors_origins.join(",")),
        ],
    );

    let store = MovieStore::seeded()
        .map_err(|e| boot_failed(format!("Failed to load seed catalog: {}", e)))?;
    Logger::info(Event::SeedLoaded, &[("movies", &store.len().to_string())]);

    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| boot_failed(format!("HTTP server failed: {}", e)))
}

/// Validate stdin as a new movie, or as a patch with `partial`
pub fn validate(partial: bool) -> CliResult<()> {
    let input = read_request()?;

    match check(&input, partial)? {
        Ok(normalized) => write_response(normalized),
        Err(errors) => {
            write_validation_errors(&errors)?;
            Err(CliError::validation_failed(errors.len()))
        }
    }
}

/// Normalized JSON on success; the outer error is only for serialization
fn check(input: &Value, partial: bool) -> CliResult<Result<Value, ValidationErrors>> {
    let outcome = if partial {
        match validate_partial(input) {
            Ok(patch) => Ok(serde_json::to_value(patch)?),
            Err(errors) => Err(errors),
        }
    } else {
        match validate_full(input) {
            Ok(movie) => Ok(serde_json::to_value(movie)?),
            Err(errors) => Err(errors),
        }
    };
    Ok(outcome)
}

fn boot_failed(reason: String) -> CliError {
    Logger::fatal(Event::BootFailed, &[("reason", &reason)]);
    CliError::boot_failed(reason)
}
