//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use voxa_voice::LiveKitConfig;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// LiveKit endpoint and signing credentials.
    #[serde(default)]
    pub livekit: LiveKitConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "voxa_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5001
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `VOXA_HOST` overrides `server.host`
/// - `VOXA_PORT` overrides `server.port`
/// - `VOXA_LOG_LEVEL` overrides `logging.level`
/// - `VOXA_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `LIVEKIT_URL`, `LIVEKIT_API_KEY`, `LIVEKIT_API_SECRET` override the
///   matching `livekit.*` keys
/// - `LIVEKIT_TOKEN_TTL_SECONDS` overrides `livekit.token_ttl_seconds`
/// - `VOXA_DIRECTORY_TIMEOUT_MS` overrides `livekit.directory_timeout_ms`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Applies overrides looked up through `var`; unparsable numbers are ignored.
pub fn apply_env_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = var("VOXA_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Some(port) = var("VOXA_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Some(level) = var("VOXA_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = var("VOXA_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    if let Some(url) = var("LIVEKIT_URL") {
        config.livekit.url = url;
    }
    if let Some(key) = var("LIVEKIT_API_KEY") {
        config.livekit.api_key = key;
    }
    if let Some(secret) = var("LIVEKIT_API_SECRET") {
        config.livekit.api_secret = secret;
    }
    if let Some(ttl) = var("LIVEKIT_TOKEN_TTL_SECONDS") {
        if let Ok(parsed) = ttl.parse() {
            config.livekit.token_ttl_seconds = parsed;
        }
    }
    if let Some(timeout) = var("VOXA_DIRECTORY_TIMEOUT_MS") {
        if let Ok(parsed) = timeout.parse() {
            config.livekit.directory_timeout_ms = parsed;
        }
    }

    config
}
