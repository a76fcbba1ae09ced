//! HTTP Server Configuration
//!
//! Host, port, and CORS allow-list. Values come from an optional JSON file,
//! then the `PORT` environment variable, then the `--port` flag, each
//! overriding the one before.

use std::fs;
use std::path::Path;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 1234)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to make cross-origin requests
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    1234
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:35087".to_string(),
        "http://localhost:34359".to_string(),
        "http://localhost:1234".to_string(),
        "http://localhost:8080".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: HttpServerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the `PORT` environment value and the command-line port, in
    /// that order. An empty `PORT` is ignored.
    pub fn resolve_port(mut self, flag: Option<u16>, env: Option<String>) -> ConfigResult<Self> {
        if let Some(raw) = env.filter(|v| !v.trim().is_empty()) {
            self.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }
        if let Some(port) = flag {
            self.port = port;
        }
        Ok(self)
    }

    /// Every origin must be usable as a header value
    fn validate(&self) -> ConfigResult<()> {
        for origin in &self.cors_origins {
            if origin.parse::<HeaderValue>().is_err() || url::Url::parse(origin).is_err() {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 1234);
        assert!(config.cors_origins.contains(&"http://localhost:8080".to_string()));
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = HttpServerConfig::from_json(r#"{"port": 3000}"#).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.cors_origins, default_cors_origins());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let result = HttpServerConfig::from_json(r#"{"cors_origins": ["not an origin"]}"#);
        assert!(matches!(result, Err(ConfigError::InvalidOrigin(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "127.0.0.1", "port": 4000}}"#).unwrap();

        let config = HttpServerConfig::load(file.path()).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:4000");
    }

    #[test]
    fn test_load_missing_file() {
        let result = HttpServerConfig::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_port_precedence() {
        let base = HttpServerConfig::with_port(1000);

        let config = base.clone().resolve_port(None, None).unwrap();
        assert_eq!(config.port, 1000);

        let config = base.clone().resolve_port(None, Some("2000".into())).unwrap();
        assert_eq!(config.port, 2000);

        let config = base.clone().resolve_port(Some(3000), Some("2000".into())).unwrap();
        assert_eq!(config.port, 3000);

        let config = base.clone().resolve_port(None, Some("".into())).unwrap();
        assert_eq!(config.port, 1000);
    }

    #[test]
    fn test_bad_env_port() {
        let result = HttpServerConfig::default().resolve_port(None, Some("eighty".into()));
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }
}
