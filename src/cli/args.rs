//! CLI argument definitions using clap
//!
//! Commands:
//! - movie-catalog serve [--config <path>] [--port <n>]
//! - movie-catalog validate [--partial]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory movie catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "movie-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides PORT and the config file)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Validate one movie JSON object read from stdin
    Validate {
        /// Check as a partial update instead of a new movie
        #[arg(long)]
        partial: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["movie-catalog", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_validate_partial() {
        let cli = Cli::try_parse_from(["movie-catalog", "validate", "--partial"]).unwrap();
        assert!(matches!(cli.command, Command::Validate { partial: true }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["movie-catalog"]).is_err());
    }
}
