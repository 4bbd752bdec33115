use livekit_api::access_token::AccessTokenError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("room directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("LiveKit token error: {0}")]
    Token(#[from] AccessTokenError),
}

/// Coarse failure classes surfaced to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The external room directory could not be reached.
    ServiceUnavailable,
    /// Credentials or URL are missing, placeholders, or rejected by the signer.
    ConfigurationError,
    /// The caller supplied inputs a token cannot be built from.
    BadRequest,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::ConfigurationError => "configuration_error",
            ErrorKind::BadRequest => "bad_request",
        }
    }
}

impl VoiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VoiceError::DirectoryUnavailable(_) => ErrorKind::ServiceUnavailable,
            VoiceError::Config(_) => ErrorKind::ConfigurationError,
            VoiceError::Token(AccessTokenError::InvalidClaims(_)) => ErrorKind::BadRequest,
            VoiceError::Token(_) => ErrorKind::ConfigurationError,
        }
    }
}
