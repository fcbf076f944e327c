//! Shop assistant operations on top of a [`GenerativeModel`].

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info, warn};

use super::{AiSettings, GenerativeModel, prompts};
use crate::domain::{AiDiagnosis, BlogDraft};
use crate::error::AiError;
use crate::store::display_date;

/// Shape of the blog generation response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedPost {
    title: String,
    content: String,
    category: String,
    read_time: String,
    image_prompt: String,
}

/// Typed front for the assistant features.
#[derive(Clone)]
pub struct AiService {
    model: Arc<dyn GenerativeModel>,
    text_model: String,
    image_model: String,
}

impl std::fmt::Debug for AiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiService")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

fn record(operation: &'static str, outcome: &'static str) {
    metrics::counter!("shop_ai_requests_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}

fn require(field: &str, value: &str) -> Result<(), AiError> {
    if value.trim().is_empty() {
        return Err(AiError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

impl AiService {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>, settings: &AiSettings) -> Self {
        Self {
            model,
            text_model: settings.text_model.clone(),
            image_model: settings.image_model.clone(),
        }
    }

    /// Likely cause, cost range and parts for a customer complaint.
    pub async fn diagnose(&self, complaint: &str) -> Result<AiDiagnosis, AiError> {
        require("complaint", complaint)?;
        let result = async {
            let value = self
                .model
                .generate_json(&self.text_model, &prompts::diagnosis(complaint), &prompts::diagnosis_schema())
                .await?;
            Ok::<_, AiError>(serde_json::from_value::<AiDiagnosis>(value)?)
        }
        .await;

        match result {
            Ok(diagnosis) => {
                record("diagnosis", "ok");
                info!(name: "ai.diagnosis.completed", confidence = diagnosis.confidence, "Diagnosis generated");
                Ok(diagnosis)
            }
            Err(e) => {
                record("diagnosis", "error");
                error!(name: "ai.request.failed", operation = "diagnosis", error = %e, "AI diagnosis failed");
                Err(e)
            }
        }
    }

    /// Draft a blog post on `topic`, dated `today`.
    pub async fn generate_blog_text(&self, topic: &str, today: NaiveDate) -> Result<BlogDraft, AiError> {
        require("topic", topic)?;
        let result = async {
            let value = self
                .model
                .generate_json(&self.text_model, &prompts::blog_text(topic), &prompts::blog_schema())
                .await?;
            Ok::<_, AiError>(serde_json::from_value::<GeneratedPost>(value)?)
        }
        .await;

        match result {
            Ok(post) => {
                record("blog_text", "ok");
                Ok(BlogDraft {
                    title: post.title,
                    content: post.content,
                    category: post.category,
                    read_time: post.read_time,
                    image_prompt: Some(post.image_prompt),
                    date: Some(display_date(today)),
                    image: None,
                })
            }
            Err(e) => {
                record("blog_text", "error");
                error!(name: "ai.request.failed", operation = "blog_text", error = %e, "Blog generation failed");
                Err(e)
            }
        }
    }

    /// Banner image for a post, as a `data:` URL.
    pub async fn generate_blog_image(&self, prompt: &str) -> Result<String, AiError> {
        require("image prompt", prompt)?;
        let result = async {
            let image = self
                .model
                .generate_image(
                    &self.image_model,
                    &prompts::blog_image(prompt),
                    prompts::BLOG_IMAGE_ASPECT_RATIO,
                )
                .await?;
            STANDARD.decode(image.data.as_bytes())?;
            Ok::<_, AiError>(image.to_data_url())
        }
        .await;

        match &result {
            Ok(_) => record("blog_image", "ok"),
            Err(e) => {
                record("blog_image", "error");
                error!(name: "ai.request.failed", operation = "blog_image", error = %e, "Image generation failed");
            }
        }
        result
    }

    /// Three to five short insights for the manager. Never fails: any error
    /// yields [`prompts::DEFAULT_INSIGHTS`].
    pub async fn insights(&self, summary: &str) -> Vec<String> {
        let result = async {
            let value = self
                .model
                .generate_json(&self.text_model, &prompts::insights(summary), &prompts::insights_schema())
                .await?;
            Ok::<_, AiError>(serde_json::from_value::<Vec<String>>(value)?)
        }
        .await;

        let insights: Vec<String> = match result {
            Ok(list) => list.into_iter().filter(|s| !s.trim().is_empty()).collect(),
            Err(e) => {
                record("insights", "error");
                warn!(name: "ai.insights.fallback", error = %e, "Using default insights");
                return default_insights();
            }
        };

        if insights.is_empty() {
            record("insights", "error");
            warn!(name: "ai.insights.fallback", "Model returned no insights");
            return default_insights();
        }
        record("insights", "ok");
        insights
    }

    /// Short stock run-out forecast. Never fails: any error yields
    /// [`prompts::PREDICTION_UNAVAILABLE`].
    pub async fn inventory_prediction(&self, history: &str) -> String {
        match self
            .model
            .generate_text(&self.text_model, &prompts::inventory_prediction(history))
            .await
        {
            Ok(text) => {
                record("inventory_prediction", "ok");
                text.trim().to_string()
            }
            Err(e) => {
                record("inventory_prediction", "error");
                warn!(name: "ai.prediction.fallback", error = %e, "Inventory prediction unavailable");
                prompts::PREDICTION_UNAVAILABLE.to_string()
            }
        }
    }
}

fn default_insights() -> Vec<String> {
    prompts::DEFAULT_INSIGHTS.iter().map(ToString::to_string).collect()
}
