//! CLI module for the movie catalog
//!
//! Provides command-line interface for:
//! - serve: Load configuration and seed data, then serve HTTP
//! - validate: One-shot schema check of a JSON object from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, run, run_command, serve, validate};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_response, write_validation_errors};
