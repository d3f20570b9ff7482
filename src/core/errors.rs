//! Gallery error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::types::ErrorResponse;

/// Errors raised while fetching or serving NFTs.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The HTTP request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not JSON, or not the JSON we expected.
    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    /// The body parsed but lacks the array the caller asked for.
    #[error("Provider response is missing `{0}`")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl GalleryError {
    /// HTTP status used when the error reaches a JSON endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Network(_) | Self::Status { .. } | Self::Decode(_) | Self::MissingField(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "PROVIDER_UNREACHABLE",
            Self::Status { .. } => "PROVIDER_STATUS",
            Self::Decode(_) => "PROVIDER_DECODE",
            Self::MissingField(_) => "PROVIDER_MISSING_FIELD",
            Self::Config(_) => "CONFIG",
            Self::Io(_) => "IO",
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(err: std::io::Error) -> Self {
        GalleryError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for GalleryError {
    fn from(err: toml::de::Error) -> Self {
        GalleryError::Config(err.to_string())
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
