//! LiveKit integration for the Voxa backend.
//!
//! Lists live rooms through the LiveKit Room Service, allocates collision-free
//! room names against that listing, and mints join tokens scoped to a single
//! room. Media transport and room membership stay on the LiveKit server; this
//! crate only deals with names and signed grants.

pub mod allocator;
pub mod config;
pub mod directory;
pub mod error;
pub mod service;
pub mod token;

pub use allocator::{allocate_room_name, allocate_room_name_with, random_room_name};
pub use config::{
    LiveKitConfig, PLACEHOLDER_API_KEY, PLACEHOLDER_API_SECRET, PLACEHOLDER_LIVEKIT_URL,
};
pub use directory::{LiveKitRoomDirectory, RoomDirectory};
pub use error::{ErrorKind, VoiceError};
pub use service::VoiceService;
pub use token::TokenIssuer;
