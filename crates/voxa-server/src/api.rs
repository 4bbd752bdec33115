//! API handlers for the Voxa server.

use crate::AppState;
use axum::{
    extract::{Extension, Json, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use voxa_voice::{ErrorKind, VoiceError};

/// Identity used when the caller does not pass `name`.
const DEFAULT_IDENTITY: &str = "user";

/// Query string for `GET /getToken`.
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    /// Participant identity and display name.
    #[serde(default = "default_identity")]
    pub name: String,
    /// Room to join. A fresh room is allocated when absent or empty.
    #[serde(default)]
    pub room: Option<String>,
}

fn default_identity() -> String {
    DEFAULT_IDENTITY.to_string()
}

/// Response body for `GET /getToken`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub room: String,
}

/// Response body for `GET /getLiveKitUrl`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LiveKitUrlResponse {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub livekit_url_configured: bool,
    pub api_key_configured: bool,
    pub api_secret_configured: bool,
}

/// API error type mapping to HTTP status codes.
///
/// The body is always `{"error": <message>, "kind": <kind>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error("{0}")]
    ConfigurationError(String),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn kind(&self) -> ErrorKind {
        match self {
            ApiError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            ApiError::ConfigurationError(_) => ErrorKind::ConfigurationError,
            ApiError::BadRequest(_) => ErrorKind::BadRequest,
        }
    }
}

impl From<VoiceError> for ApiError {
    fn from(err: VoiceError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::ServiceUnavailable => ApiError::ServiceUnavailable(message),
            ErrorKind::ConfigurationError => ApiError::ConfigurationError(message),
            ErrorKind::BadRequest => ApiError::BadRequest(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = match kind {
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::ConfigurationError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "kind": kind.as_str(),
        }));

        (status, body).into_response()
    }
}

/// Handler for `GET /getToken`.
pub async fn get_token_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<TokenResponse>, ApiError> {
    let room = match query.room.filter(|room| !room.is_empty()) {
        Some(room) => room,
        None => state.voice_service.allocate_room_name().await.map_err(|e| {
            tracing::warn!(error = %e, "room allocation failed");
            ApiError::from(e)
        })?,
    };

    let token = state
        .voice_service
        .issue_token(&query.name, &room)
        .map_err(|e| {
            tracing::error!(error = %e, %room, "failed to issue LiveKit token");
            ApiError::from(e)
        })?;

    tracing::info!(identity = %query.name, %room, "issued room token");
    Ok(Json(TokenResponse { token, room }))
}

/// Handler for `GET /getLiveKitUrl`.
pub async fn get_livekit_url_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> (StatusCode, Json<LiveKitUrlResponse>) {
    let url = state.voice_service.get_url().to_string();

    if !state.voice_service.config().url_configured() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LiveKitUrlResponse {
                url,
                error: Some(
                    "LIVEKIT_URL not configured. Please set LIVEKIT_URL in your .env file."
                        .to_string(),
                ),
            }),
        );
    }

    (StatusCode::OK, Json(LiveKitUrlResponse { url, error: None }))
}

/// Handler for `GET /health`.
///
/// Reports which LiveKit settings are present. Does not contact LiveKit.
pub async fn health_handler(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    let config = state.voice_service.config();
    Json(HealthResponse {
        status: "ok".to_string(),
        livekit_url_configured: config.url_configured(),
        api_key_configured: config.api_key_configured(),
        api_secret_configured: config.api_secret_configured(),
    })
}
