//! Signed room join tokens.

use crate::config::{
    is_configured, LiveKitConfig, PLACEHOLDER_API_KEY, PLACEHOLDER_API_SECRET,
};
use crate::error::VoiceError;
use livekit_api::access_token::{AccessToken, VideoGrants};
use std::time::Duration;

/// Mints LiveKit JWTs that grant full participation in a single room.
#[derive(Clone)]
pub struct TokenIssuer {
    api_key: String,
    api_secret: String,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(config: &LiveKitConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            ttl: config.token_ttl(),
        }
    }

    /// Issues a token whose subject and display name are both `identity`.
    ///
    /// The grant always carries join, publish and subscribe rights for `room`.
    /// Missing or placeholder credentials fail before anything is signed.
    pub fn issue_token(&self, identity: &str, room: &str) -> Result<String, VoiceError> {
        self.ensure_credentials()?;

        let token = AccessToken::with_api_key(&self.api_key, &self.api_secret)
            .with_identity(identity)
            .with_name(identity)
            .with_grants(VideoGrants {
                room_join: true,
                room: room.to_string(),
                can_publish: true,
                can_subscribe: true,
                ..Default::default()
            })
            .with_ttl(self.ttl);

        token.to_jwt().map_err(VoiceError::Token)
    }

    fn ensure_credentials(&self) -> Result<(), VoiceError> {
        if !is_configured(&self.api_key, PLACEHOLDER_API_KEY) {
            return Err(VoiceError::Config(
                "LIVEKIT_API_KEY is not configured".to_string(),
            ));
        }
        if !is_configured(&self.api_secret, PLACEHOLDER_API_SECRET) {
            return Err(VoiceError::Config(
                "LIVEKIT_API_SECRET is not configured".to_string(),
            ));
        }
        Ok(())
    }
}
