//! Error types for the store, the AI adapter and the HTTP surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures of store mutations and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record of `kind` has this id.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// A record of `kind` with this id already exists.
    #[error("{kind} '{id}' already exists")]
    Conflict { kind: &'static str, id: String },

    /// The request was rejected before touching any state.
    #[error("Invalid input: {0}")]
    Invalid(String),
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn conflict(kind: &'static str, id: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            id: id.into(),
        }
    }
}

/// Failures of calls to the generative-AI service.
#[derive(Error, Debug)]
pub enum AiError {
    /// No API key was configured.
    #[error("AI service is not configured")]
    NotConfigured,

    /// The prompt was empty or otherwise unusable.
    #[error("Invalid AI request: {0}")]
    InvalidInput(String),

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// The response carried no text candidate.
    #[error("AI response contained no content")]
    EmptyResponse,

    /// An image was requested but no inline image data came back.
    #[error("No image data returned")]
    MissingImage,

    /// The structured response did not match the expected schema.
    #[error("Malformed AI response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The inline image payload was not valid base64.
    #[error("Invalid image payload: {0}")]
    InvalidImage(#[from] base64::DecodeError),
}

/// Error returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ai(#[from] AiError),
}

impl ApiError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Store(StoreError::Invalid(_)) | Self::Ai(AiError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Ai(AiError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Ai(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(name: "api.request.failed", error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
