//! Random room names that do not clash with live rooms.
//!
//! The directory is queried once per allocation. Collisions are resolved
//! against that snapshot only, so another process creating the same name
//! between the listing and the join is not detected.

use crate::directory::RoomDirectory;
use crate::error::VoiceError;

/// Prefix shared by every generated room name.
pub const ROOM_NAME_PREFIX: &str = "room-";

/// Number of random bytes behind each name (two hex chars per byte).
const ROOM_NAME_RANDOM_BYTES: usize = 4;

/// Returns a fresh `room-xxxxxxxx` candidate with no uniqueness check.
pub fn random_room_name() -> String {
    let bytes: [u8; ROOM_NAME_RANDOM_BYTES] = rand::random();
    format!("{}{}", ROOM_NAME_PREFIX, hex::encode(bytes))
}

/// Allocates a room name absent from the directory's current listing.
pub async fn allocate_room_name(directory: &dyn RoomDirectory) -> Result<String, VoiceError> {
    allocate_room_name_with(directory, random_room_name).await
}

/// Same as [`allocate_room_name`], drawing candidates from `next_candidate`.
pub async fn allocate_room_name_with<F>(
    directory: &dyn RoomDirectory,
    mut next_candidate: F,
) -> Result<String, VoiceError>
where
    F: FnMut() -> String,
{
    let mut candidate = next_candidate();
    let active = directory.list_room_names().await?;

    let mut collisions = 0u32;
    while active.contains(&candidate) {
        collisions += 1;
        tracing::debug!(%candidate, collisions, "room name collides with an active room");
        candidate = next_candidate();
    }

    tracing::info!(room = %candidate, active_rooms = active.len(), "allocated room name");
    Ok(candidate)
}
