#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use voxa_server::{app, AppState};
use voxa_voice::{LiveKitConfig, RoomDirectory, VoiceError, VoiceService};

pub const TEST_URL: &str = "ws://localhost:7880";
pub const TEST_KEY: &str = "devkey";
pub const TEST_SECRET: &str = "devsecret";

/// Directory double that records how often it was listed.
#[derive(Default)]
pub struct CountingDirectory {
    pub rooms: HashSet<String>,
    pub fail: bool,
    calls: AtomicUsize,
}

impl CountingDirectory {
    pub fn with_rooms(rooms: &[&str]) -> Self {
        Self {
            rooms: rooms.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoomDirectory for CountingDirectory {
    async fn list_room_names(&self) -> Result<HashSet<String>, VoiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(VoiceError::DirectoryUnavailable(
                "error sending request: Connection refused (os error 111)".to_string(),
            ));
        }
        Ok(self.rooms.clone())
    }
}

pub fn setup_app(config: LiveKitConfig, directory: Arc<CountingDirectory>) -> Router {
    let voice_service = VoiceService::with_directory(config, directory);
    app(AppState {
        voice_service: Arc::new(voice_service),
    })
}

pub fn configured() -> LiveKitConfig {
    LiveKitConfig::new(TEST_URL, TEST_KEY, TEST_SECRET)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}
