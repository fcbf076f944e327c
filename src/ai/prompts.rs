//! Prompt text and response schemas for each assistant operation.
//!
//! Schemas use the Gemini `responseSchema` dialect (upper-case type names).

use serde_json::{Value, json};

pub fn diagnosis(complaint: &str) -> String {
    format!("Diagnose this car issue for an auto shop in Ghana. Complaint: \"{complaint}\"")
}

pub fn diagnosis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "diagnosis": { "type": "STRING", "description": "A detailed explanation of the likely problem." },
            "confidence": { "type": "NUMBER", "description": "Confidence level between 0 and 1." },
            "estimatedCostRange": { "type": "STRING", "description": "Estimated cost range in GHS (₵)." },
            "suggestedParts": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of common parts needed."
            },
            "repairTime": { "type": "STRING", "description": "Estimated time to fix." }
        },
        "required": ["diagnosis", "confidence", "estimatedCostRange", "suggestedParts", "repairTime"]
    })
}

pub fn blog_text(topic: &str) -> String {
    format!(
        "Generate a blog post for an auto shop in Ghana based on this topic: \"{topic}\". \
         Make it engaging, localized to Ghana, and informative for car owners."
    )
}

pub fn blog_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "content": { "type": "STRING" },
            "category": { "type": "STRING" },
            "readTime": { "type": "STRING" },
            "imagePrompt": {
                "type": "STRING",
                "description": "A highly descriptive prompt for an AI image generator to create a relevant banner for this post."
            }
        },
        "required": ["title", "content", "category", "readTime", "imagePrompt"]
    })
}

pub fn blog_image(prompt: &str) -> String {
    format!(
        "Professional automotive photography: {prompt}. High quality, cinematic lighting, modern auto shop context."
    )
}

/// Banner images are wide.
pub const BLOG_IMAGE_ASPECT_RATIO: &str = "16:9";

pub fn insights(summary: &str) -> String {
    format!(
        "Provide 3-5 short, actionable business insights for an auto shop manager based on this summary data: {summary}. \
         Output as a simple bulleted list of strings."
    )
}

pub fn insights_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}

pub fn inventory_prediction(history: &str) -> String {
    format!(
        "Predict stock runout and suggest reorder date for this inventory item history: {history}. Keep it under 50 words."
    )
}

/// Shown when the insights call fails.
pub const DEFAULT_INSIGHTS: [&str; 3] = [
    "Focus on high-margin repairs this week.",
    "Check inventory for frequent brake pad replacements.",
    "Follow up with customers from last month.",
];

/// Shown when the inventory prediction call fails.
pub const PREDICTION_UNAVAILABLE: &str = "Inventory prediction unavailable.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_input() {
        assert!(diagnosis("car shakes at 80km/h").contains("\"car shakes at 80km/h\""));
        assert!(blog_text("rainy season").contains("\"rainy season\""));
        assert!(blog_image("a mechanic").starts_with("Professional automotive photography: a mechanic."));
    }

    #[test]
    fn test_schemas_list_required_fields() {
        let schema = diagnosis_schema();
        assert_eq!(schema["required"].as_array().unwrap().len(), 5);
        assert_eq!(blog_schema()["properties"]["readTime"]["type"], "STRING");
        assert_eq!(insights_schema()["type"], "ARRAY");
    }
}
