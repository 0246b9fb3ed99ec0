//! Configuration management for the MCP server.
//!
//! Everything is read from environment variables (optionally via a `.env`
//! file) into a single [`Config`] at startup and is read-only afterwards.

use super::transport::TransportConfig;
use crate::domains::registrar::{Credentials, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Namecheap API credentials.
    pub namecheap: Credentials,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level name (trace, debug, info, warn, error, fatal, panic).
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line output.
    #[default]
    Production,
    /// Multi-line output with source locations.
    Development,
}

impl LogFormat {
    /// Parse a format name; anything but `development` is production.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl LoggingConfig {
    /// Resolve the configured level name.
    ///
    /// `fatal` and `panic` have no tracing equivalent and map to ERROR.
    /// Unknown names fall back to INFO.
    pub fn tracing_level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" | "warning" => Level::WARN,
            "error" | "fatal" | "panic" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "domain-checker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Production,
            },
            transport: TransportConfig::default(),
            namecheap: Credentials {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                ..Default::default()
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_LOG_FORMAT`); `LOG_LEVEL` and `LOG_FORMAT` are
    /// accepted as fallbacks. Credentials come from `NAMECHEAP_API_USER`,
    /// `NAMECHEAP_API_KEY`, `NAMECHEAP_USERNAME`, `NAMECHEAP_CLIENT_IP` and
    /// `NAMECHEAP_ENDPOINT`.
    ///
    /// Logging is not initialized yet when this runs, so nothing is logged here.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = first_var(&["MCP_LOG_LEVEL", "LOG_LEVEL"]) {
            config.logging.level = level;
        }

        if let Some(format) = first_var(&["MCP_LOG_FORMAT", "LOG_FORMAT"]) {
            config.logging.format = LogFormat::parse(&format);
        }

        config.transport = TransportConfig::from_env();

        let namecheap = &mut config.namecheap;
        namecheap.api_user = std::env::var("NAMECHEAP_API_USER").unwrap_or_default();
        namecheap.api_key = std::env::var("NAMECHEAP_API_KEY").unwrap_or_default();
        namecheap.username = std::env::var("NAMECHEAP_USERNAME").unwrap_or_default();
        namecheap.client_ip = std::env::var("NAMECHEAP_CLIENT_IP").unwrap_or_default();
        if let Ok(endpoint) = std::env::var("NAMECHEAP_ENDPOINT") {
            namecheap.endpoint = endpoint;
        }

        config
    }
}

fn first_var(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| std::env::var(name).ok())
}
