//! Voxa server library logic.

pub mod api;
pub mod config;
pub mod env_check;

use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Room allocation and token issuance against LiveKit.
    pub voice_service: Arc<voxa_voice::VoiceService>,
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/getToken", get(api::get_token_handler))
        .route("/getLiveKitUrl", get(api::get_livekit_url_handler))
        .route("/health", get(api::health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
