use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use voxa_voice::{
    allocate_room_name_with, ErrorKind, LiveKitConfig, LiveKitRoomDirectory, RoomDirectory,
    TokenIssuer, VoiceError, VoiceService,
};

const DEFAULT_URL: &str = "ws://localhost:7880";
const DEFAULT_KEY: &str = "devkey";
const DEFAULT_SECRET: &str = "secret";

struct FakeDirectory {
    rooms: HashSet<String>,
    calls: AtomicUsize,
}

impl FakeDirectory {
    fn new(rooms: &[&str]) -> Self {
        Self {
            rooms: rooms.iter().map(|r| r.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoomDirectory for FakeDirectory {
    async fn list_room_names(&self) -> Result<HashSet<String>, VoiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rooms.clone())
    }
}

struct DownDirectory;

#[async_trait]
impl RoomDirectory for DownDirectory {
    async fn list_room_names(&self) -> Result<HashSet<String>, VoiceError> {
        Err(VoiceError::DirectoryUnavailable(
            "Connection refused (os error 111)".to_string(),
        ))
    }
}

fn scripted(names: &[&str]) -> impl FnMut() -> String {
    let mut queue: VecDeque<String> = names.iter().map(|n| n.to_string()).collect();
    move || queue.pop_front().expect("candidate source exhausted")
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    name: String,
    video: VideoClaims,
}

#[derive(Debug, Deserialize, PartialEq)]
struct VideoClaims {
    #[serde(rename = "roomJoin")]
    room_join: bool,
    room: String,
    #[serde(rename = "canPublish")]
    can_publish: bool,
    #[serde(rename = "canSubscribe")]
    can_subscribe: bool,
}

fn decode_claims(token: &str) -> Claims {
    let validation = Validation::new(Algorithm::HS256);
    let key = DecodingKey::from_secret(DEFAULT_SECRET.as_bytes());
    decode::<Claims>(token, &key, &validation)
        .expect("Failed to decode token")
        .claims
}

#[tokio::test]
async fn test_collision_retries_without_refetching() {
    let directory = FakeDirectory::new(&["room-aaaaaaaa"]);

    let room = allocate_room_name_with(&directory, scripted(&["room-aaaaaaaa", "room-bbbbbbbb"]))
        .await
        .expect("allocation failed");

    assert_eq!(room, "room-bbbbbbbb");
    assert_eq!(directory.calls(), 1, "directory must be listed exactly once");
}

#[tokio::test]
async fn test_allocated_name_avoids_active_rooms() {
    let directory = FakeDirectory::new(&["room-00000000", "room-11111111", "room-22222222"]);
    let service = VoiceService::with_directory(
        LiveKitConfig::new(DEFAULT_URL, DEFAULT_KEY, DEFAULT_SECRET),
        Arc::new(directory),
    );

    for _ in 0..32 {
        let room = service.allocate_room_name().await.unwrap();
        let suffix = room.strip_prefix("room-").expect("missing prefix");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(!["room-00000000", "room-11111111", "room-22222222"].contains(&room.as_str()));
    }
}

#[tokio::test]
async fn test_directory_failure_is_service_unavailable() {
    let service = VoiceService::with_directory(
        LiveKitConfig::new(DEFAULT_URL, DEFAULT_KEY, DEFAULT_SECRET),
        Arc::new(DownDirectory),
    );

    let err = service.allocate_room_name().await.unwrap_err();
    assert_eq!(err.kind().as_str(), "service_unavailable");
}

#[tokio::test]
async fn test_livekit_directory_times_out_on_silent_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept connections and never answer them.
    let holder = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let mut config = LiveKitConfig::new(format!("ws://{addr}"), DEFAULT_KEY, DEFAULT_SECRET);
    config.directory_timeout_ms = 200;
    let directory = LiveKitRoomDirectory::new(&config);

    let started = Instant::now();
    let err = directory.list_room_names().await.unwrap_err();
    let elapsed = started.elapsed();

    assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    assert!(err.to_string().contains("timed out"), "unexpected error: {err}");
    assert!(
        elapsed < Duration::from_millis(900),
        "listing took {elapsed:?} despite a 200 ms bound"
    );

    holder.abort();
}

#[tokio::test]
async fn test_livekit_directory_refused_connection_is_service_unavailable() {
    let config = LiveKitConfig::new("ws://127.0.0.1:1", DEFAULT_KEY, DEFAULT_SECRET);
    let directory = LiveKitRoomDirectory::new(&config);

    let err = directory.list_room_names().await.unwrap_err();
    assert!(
        matches!(err, VoiceError::DirectoryUnavailable(_)),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
}

#[tokio::test]
async fn test_token_grants_full_room_access() {
    let service = VoiceService::new(LiveKitConfig::new(DEFAULT_URL, DEFAULT_KEY, DEFAULT_SECRET));

    let token = service
        .issue_token("Ada", "room-1234abcd")
        .expect("Failed to generate token");
    let claims = decode_claims(&token);

    assert_eq!(claims.sub, "Ada");
    assert_eq!(claims.name, "Ada");
    assert!(claims.video.room_join, "roomJoin should be true");
    assert!(claims.video.can_publish, "canPublish should be true");
    assert!(claims.video.can_subscribe, "canSubscribe should be true");
    assert_eq!(claims.video.room, "room-1234abcd");
}

#[tokio::test]
async fn test_repeated_tokens_carry_same_grant() {
    let service = VoiceService::new(LiveKitConfig::new(DEFAULT_URL, DEFAULT_KEY, DEFAULT_SECRET));

    let first = decode_claims(&service.issue_token("user", "room-cafebabe").unwrap());
    let second = decode_claims(&service.issue_token("user", "room-cafebabe").unwrap());

    assert_eq!(first.sub, second.sub);
    assert_eq!(first.video, second.video);
}

#[test]
fn test_missing_credentials_refuse_to_sign() {
    let issuer = TokenIssuer::new(&LiveKitConfig::new(DEFAULT_URL, "", ""));
    let err = issuer.issue_token("user", "room-cafebabe").unwrap_err();
    assert_eq!(err.kind().as_str(), "configuration_error");
}

#[test]
fn test_livekit_config_from_toml() {
    let toml_str = r#"
        url = "wss://demo.livekit.cloud"
        api_key = "key"
        api_secret = "secret"
        directory_timeout_ms = 750
    "#;

    let config: LiveKitConfig = toml::from_str(toml_str).expect("parse TOML");
    assert_eq!(config.url, "wss://demo.livekit.cloud");
    assert_eq!(config.directory_timeout().as_millis(), 750);
    assert_eq!(config.token_ttl_seconds, 6 * 60 * 60);
}

#[test]
fn test_livekit_config_serialization_skips_secret() {
    let config = LiveKitConfig::new(DEFAULT_URL, DEFAULT_KEY, DEFAULT_SECRET);
    let json = serde_json::to_value(&config).expect("serialize");
    assert_eq!(json["api_key"], DEFAULT_KEY);
    assert!(json.get("api_secret").is_none());
}
