use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Value shipped in sample `.env` files for `LIVEKIT_URL`.
pub const PLACEHOLDER_LIVEKIT_URL: &str = "wss://your-livekit-server.com";
/// Value shipped in sample `.env` files for `LIVEKIT_API_KEY`.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key";
/// Value shipped in sample `.env` files for `LIVEKIT_API_SECRET`.
pub const PLACEHOLDER_API_SECRET: &str = "your-api-secret";

fn default_url() -> String {
    PLACEHOLDER_LIVEKIT_URL.to_string()
}

fn default_token_ttl_seconds() -> u64 {
    6 * 60 * 60
}

fn default_directory_timeout_ms() -> u64 {
    5_000
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LiveKitConfig {
    /// WebSocket endpoint handed to browsers (`ws://` or `wss://`).
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing)]
    pub api_secret: String,
    /// JWT token TTL in seconds for room join tokens. Default: 21600 (6 hours).
    #[serde(default = "default_token_ttl_seconds")]
    pub token_ttl_seconds: u64,
    /// Upper bound on a single room directory listing call.
    #[serde(default = "default_directory_timeout_ms")]
    pub directory_timeout_ms: u64,
}

impl Default for LiveKitConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: String::new(),
            api_secret: String::new(),
            token_ttl_seconds: default_token_ttl_seconds(),
            directory_timeout_ms: default_directory_timeout_ms(),
        }
    }
}

impl fmt::Debug for LiveKitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveKitConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("directory_timeout_ms", &self.directory_timeout_ms)
            .finish()
    }
}

impl LiveKitConfig {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ..Self::default()
        }
    }

    /// True when the URL is set to something other than the sample placeholder.
    pub fn url_configured(&self) -> bool {
        is_configured(&self.url, PLACEHOLDER_LIVEKIT_URL)
    }

    pub fn api_key_configured(&self) -> bool {
        is_configured(&self.api_key, PLACEHOLDER_API_KEY)
    }

    pub fn api_secret_configured(&self) -> bool {
        is_configured(&self.api_secret, PLACEHOLDER_API_SECRET)
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }

    pub fn directory_timeout(&self) -> Duration {
        Duration::from_millis(self.directory_timeout_ms)
    }

    /// HTTP(S) base URL for the server-side Room Service API.
    ///
    /// Browsers connect over `ws(s)://`; the Twirp endpoints live on the same
    /// host under `http(s)://`.
    pub fn api_base_url(&self) -> String {
        if let Some(rest) = self.url.strip_prefix("wss://") {
            format!("https://{rest}")
        } else if let Some(rest) = self.url.strip_prefix("ws://") {
            format!("http://{rest}")
        } else {
            self.url.clone()
        }
    }
}

pub(crate) fn is_configured(value: &str, placeholder: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != placeholder
}
