//! Configuration management for the MCP server.
//!
//! Configuration is read from the process environment (optionally seeded from
//! a `.env` file) with defaults for everything except the explorer settings.

use tracing::warn;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream explorer API settings.
    pub explorer: ExplorerConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Explorer API settings.
///
/// Both values are optional here: a missing one only fails the requests
/// that need it.
#[derive(Clone, Default)]
pub struct ExplorerConfig {
    /// Base URL of the Subscan API, e.g. `https://vara.api.subscan.io`.
    pub api_url: Option<String>,

    /// Subscan API key, sent in the `X-API-Key` header.
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ExplorerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "vara-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            explorer: ExplorerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); the explorer is configured with `SUBSCAN_API_URL`
    /// and `API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.explorer.api_url = std::env::var("SUBSCAN_API_URL").ok();
        config.explorer.api_key = std::env::var("API_KEY").ok();

        config
    }

    /// Warn about explorer settings that will make every lookup fail.
    ///
    /// Call once logging is up; `from_env` runs before the subscriber exists.
    pub fn warn_missing(&self) {
        if self.explorer.api_url.is_none() {
            warn!("SUBSCAN_API_URL is not set - explorer lookups will fail");
        }
        if self.explorer.api_key.is_none() {
            warn!("API_KEY is not set - explorer lookups will fail");
        }
    }
}
