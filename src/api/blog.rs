//! Blog management and AI drafting.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::domain::{BlogDraft, BlogPost};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    /// `data:` URL.
    pub image: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(publish))
        .route("/posts/{id}", delete(delete_post))
        .route("/generate", post(generate))
        .route("/image", post(generate_image))
}

/// GET /api/blog/posts - Newest first.
async fn list_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.store.blog_posts())
}

/// POST /api/blog/posts - Publish a draft.
async fn publish(
    State(state): State<AppState>,
    Json(draft): Json<BlogDraft>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    let post = state.store.publish_draft(draft, Utc::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /api/blog/posts/{id}
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_blog_post(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/blog/generate
async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<BlogDraft>, ApiError> {
    let draft = state
        .ai
        .generate_blog_text(&req.topic, Utc::now().date_naive())
        .await?;
    Ok(Json(draft))
}

/// POST /api/blog/image
async fn generate_image(
    State(state): State<AppState>,
    Json(req): Json<ImageRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    let image = state.ai.generate_blog_image(&req.prompt).await?;
    Ok(Json(ImageResponse { image }))
}
