//! Generative-AI adapter.
//!
//! The [`GenerativeModel`] trait is the seam to the remote service; the
//! production implementation is [`GeminiClient`]. [`AiService`] owns the
//! shop-specific prompts and schemas and turns raw model output into typed
//! results.
//!
//! Calls are single requests: no retries, no cancellation, no ordering
//! between concurrent calls. Diagnosis and blog generation surface their
//! errors to the caller; insights and inventory predictions fall back to
//! fixed text.

pub mod gemini;
pub mod prompts;
mod service;

pub use gemini::GeminiClient;
pub use service::AiService;

use std::time::Duration;

use serde_json::Value;

use crate::error::AiError;

/// Default Gemini endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default model for text and structured output.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
/// Default model for image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Connection and model settings for the AI service.
#[derive(Debug, Clone)]
pub struct AiSettings {
    /// Base URL without the `/v1beta/...` path.
    pub base_url: String,
    /// API key; `None` leaves the assistant disabled.
    pub api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// An image returned inline by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload.
    pub data: String,
}

impl InlineImage {
    /// `data:{mime};base64,{data}`
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A remote generative model.
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate JSON constrained by `schema`.
    async fn generate_json(&self, model: &str, prompt: &str, schema: &Value) -> Result<Value, AiError>;

    /// Generate free text.
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, AiError>;

    /// Generate one image.
    async fn generate_image(
        &self,
        model: &str,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<InlineImage, AiError>;
}
