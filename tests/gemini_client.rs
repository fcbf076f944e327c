//! `GeminiClient` against a local stand-in for the Gemini REST API.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use biskaken_shop::ai::{AiSettings, GeminiClient, GenerativeModel};
use biskaken_shop::error::AiError;
use serde_json::{Value, json};

async fn generate_content(
    Path(model_call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": 400, "message": "API key not valid." } })),
        );
    }
    let Some(model) = model_call.strip_suffix(":generateContent") else {
        return (StatusCode::NOT_FOUND, Json(json!({})));
    };

    let config = &body["generationConfig"];
    let part = if config["imageConfig"]["aspectRatio"] == "16:9" {
        json!({ "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } })
    } else if config["responseMimeType"] == "application/json" {
        json!({ "text": "```json\n[\"Restock brake pads.\"]\n```" })
    } else {
        json!({ "text": format!("{model} says hi") })
    };

    (
        StatusCode::OK,
        Json(json!({ "candidates": [{ "content": { "role": "model", "parts": [part] } }] })),
    )
}

async fn spawn_mock() -> String {
    let app = Router::new().route("/v1beta/models/{model_call}", post(generate_content));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String, api_key: &str) -> GeminiClient {
    GeminiClient::new(AiSettings {
        base_url,
        api_key: Some(api_key.to_string()),
        timeout: Duration::from_secs(5),
        ..AiSettings::default()
    })
    .unwrap()
}

#[tokio::test]
async fn text_json_and_image_calls() {
    let base = spawn_mock().await;
    let client = client(base, "test-key");

    let text = client.generate_text("gemini-test", "hello").await.unwrap();
    assert_eq!(text, "gemini-test says hi");

    let value = client
        .generate_json("gemini-test", "insights", &json!({ "type": "ARRAY" }))
        .await
        .unwrap();
    assert_eq!(value, json!(["Restock brake pads."]));

    let image = client
        .generate_image("gemini-image", "banner", "16:9")
        .await
        .unwrap();
    assert_eq!(image.to_data_url(), "data:image/png;base64,aGVsbG8=");
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let base = spawn_mock().await;
    let client = client(base, "wrong-key");

    let err = client.generate_text("gemini-test", "hello").await.unwrap_err();
    match err {
        AiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn text_response_without_image_is_missing_image() {
    let base = spawn_mock().await;
    let client = client(base, "test-key");

    let err = client
        .generate_image("gemini-image", "banner", "1:1")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::MissingImage));
}
