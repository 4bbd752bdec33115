use crate::allocator::allocate_room_name;
use crate::config::LiveKitConfig;
use crate::directory::{LiveKitRoomDirectory, RoomDirectory};
use crate::error::VoiceError;
use crate::token::TokenIssuer;
use std::sync::Arc;

/// Everything the HTTP layer needs from LiveKit, built once at startup.
pub struct VoiceService {
    config: LiveKitConfig,
    directory: Arc<dyn RoomDirectory>,
    issuer: TokenIssuer,
}

impl std::fmt::Debug for VoiceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceService")
            .field("config", &self.config)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl VoiceService {
    pub fn new(config: LiveKitConfig) -> Self {
        let directory = Arc::new(LiveKitRoomDirectory::new(&config));
        Self::with_directory(config, directory)
    }

    /// Builds a service that lists rooms through `directory` instead of LiveKit.
    pub fn with_directory(config: LiveKitConfig, directory: Arc<dyn RoomDirectory>) -> Self {
        let issuer = TokenIssuer::new(&config);
        Self {
            config,
            directory,
            issuer,
        }
    }

    pub fn config(&self) -> &LiveKitConfig {
        &self.config
    }

    pub fn get_url(&self) -> &str {
        &self.config.url
    }

    pub async fn allocate_room_name(&self) -> Result<String, VoiceError> {
        allocate_room_name(self.directory.as_ref()).await
    }

    pub fn issue_token(&self, identity: &str, room: &str) -> Result<String, VoiceError> {
        self.issuer.issue_token(identity, room)
    }
}
