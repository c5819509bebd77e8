//! Configuration structures.
//!
//! Configuration is resolved once at startup (CLI flags and environment
//! variables) and passed explicitly into the vault client and the MCP server.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{Error, Result};

/// Default address of the Obsidian Local REST API.
pub const DEFAULT_OBSIDIAN_URL: &str = "http://localhost:27123";

/// Global server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote vault connection settings.
    pub obsidian: ObsidianConfig,

    /// Identity advertised to MCP hosts.
    pub server: ServerConfig,

    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl Config {
    pub fn new(obsidian: ObsidianConfig) -> Self {
        Self {
            obsidian,
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Connection settings for the Obsidian Local REST API.
#[derive(Clone)]
pub struct ObsidianConfig {
    /// Base URL of the REST API (scheme, host, port and optional path prefix).
    pub base_url: Url,

    /// Bearer token sent with every request.
    pub api_key: String,
}

impl ObsidianConfig {
    /// Validate and build a connection config.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::config("OBSIDIAN_API_KEY must be set"));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("invalid Obsidian URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Obsidian URL '{}' cannot be used as a base URL",
                base_url
            )));
        }

        Ok(Self { base_url, api_key })
    }
}

impl fmt::Debug for ObsidianConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObsidianConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Server identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name reported in `initialize`.
    pub name: String,

    /// Version reported in `initialize`.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "obsidian-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
