//! Listing of currently active rooms on the media server.

use crate::config::LiveKitConfig;
use crate::error::VoiceError;
use async_trait::async_trait;
use livekit_api::services::room::RoomClient;
use std::collections::HashSet;
use std::time::Duration;

/// Source of the names of rooms that are live right now.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// Returns the names of all active rooms.
    async fn list_room_names(&self) -> Result<HashSet<String>, VoiceError>;
}

/// [`RoomDirectory`] backed by the LiveKit Room Service API.
///
/// The underlying client is built once and reused for every call.
#[derive(Debug)]
pub struct LiveKitRoomDirectory {
    room_client: RoomClient,
    timeout: Duration,
}

impl LiveKitRoomDirectory {
    pub fn new(config: &LiveKitConfig) -> Self {
        let room_client =
            RoomClient::with_api_key(&config.api_base_url(), &config.api_key, &config.api_secret);
        Self {
            room_client,
            timeout: config.directory_timeout(),
        }
    }
}

#[async_trait]
impl RoomDirectory for LiveKitRoomDirectory {
    async fn list_room_names(&self) -> Result<HashSet<String>, VoiceError> {
        let rooms = tokio::time::timeout(self.timeout, self.room_client.list_rooms(Vec::new()))
            .await
            .map_err(|_| {
                VoiceError::DirectoryUnavailable(format!(
                    "room listing timed out after {} ms",
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| VoiceError::DirectoryUnavailable(e.to_string()))?;

        tracing::debug!(count = rooms.len(), "fetched active rooms");
        Ok(rooms.into_iter().map(|room| room.name).collect())
    }
}
