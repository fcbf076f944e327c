//! Google Gemini `generateContent` REST client.
//!
//! Implements [`GenerativeModel`] against
//! `{base_url}/v1beta/models/{model}:generateContent`. Structured calls set
//! `responseMimeType: application/json` together with a `responseSchema`;
//! image calls set `imageConfig.aspectRatio` and read the first inline data
//! part of the first candidate.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::{AiSettings, GenerativeModel, InlineImage};
use crate::error::AiError;

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    settings: AiSettings,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.settings.base_url)
            .field("text_model", &self.settings.text_model)
            .field("image_model", &self.settings.image_model)
            .field("configured", &self.settings.api_key.is_some())
            .finish()
    }
}

impl GeminiClient {
    /// Build a client. A missing API key is not an error here; calls fail
    /// with [`AiError::NotConfigured`] instead.
    pub fn new(settings: AiSettings) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:generateContent",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        generation_config: Option<Value>,
    ) -> Result<GenerateContentResponse, AiError> {
        let Some(api_key) = self.settings.api_key.as_deref() else {
            return Err(AiError::NotConfigured);
        };

        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });
        if let Some(config) = generation_config {
            body["generationConfig"] = config;
        }

        let url = self.endpoint(model);
        debug!(url = %url, model = %model, prompt_len = prompt.len(), "Calling generateContent");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_json(&self, model: &str, prompt: &str, schema: &Value) -> Result<Value, AiError> {
        let config = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
        let text = self.generate(model, prompt, Some(config)).await?.text()?;
        Ok(serde_json::from_str(strip_code_fence(&text))?)
    }

    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        self.generate(model, prompt, None).await?.text()
    }

    async fn generate_image(
        &self,
        model: &str,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<InlineImage, AiError> {
        let config = json!({
            "imageConfig": { "aspectRatio": aspect_ratio }
        });
        self.generate(model, prompt, Some(config)).await?.image()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

impl GenerateContentResponse {
    fn parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Result<String, AiError> {
        let text: String = self
            .parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text)
    }

    /// First inline data part of the first candidate.
    fn image(self) -> Result<InlineImage, AiError> {
        let data = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.inline_data))
            .ok_or(AiError::MissingImage)?;
        Ok(InlineImage {
            mime_type: data.mime_type.unwrap_or_else(|| "image/png".to_string()),
            data: data.data,
        })
    }
}

/// Pull `error.message` out of a Gemini error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(ToString::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Some models wrap JSON output in a markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(AiSettings {
            base_url: "https://generativelanguage.googleapis.com/".to_string(),
            ..AiSettings::default()
        })
        .unwrap();
        assert_eq!(
            client.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_text_joins_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Reorder " }, { "text": "by Friday." }] } }]
        }))
        .unwrap();
        assert_eq!(resp.text().unwrap(), "Reorder by Friday.");
    }

    #[test]
    fn test_empty_candidates_is_an_error() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(resp.text(), Err(AiError::EmptyResponse)));
        assert!(matches!(resp.image(), Err(AiError::MissingImage)));
    }

    #[test]
    fn test_image_skips_text_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Here is your banner" },
                { "inlineData": { "mimeType": "image/jpeg", "data": "aGVsbG8=" } }
            ] } }]
        }))
        .unwrap();
        let image = resp.image().unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "API key not valid.");
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n[\"a\"]\n```"), "[\"a\"]");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let client = GeminiClient::new(AiSettings::default()).unwrap();
        let err = client.generate_text("gemini-3-flash-preview", "hello").await.unwrap_err();
        assert!(matches!(err, AiError::NotConfigured));
    }
}
