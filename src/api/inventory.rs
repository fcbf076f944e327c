//! Stock list, reorder alerts, and AI stock advice.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::domain::InventoryItem;
use crate::error::ApiError;
use crate::store::NewInventoryItem;

#[derive(Debug, Deserialize)]
pub struct StockUpdate {
    pub stock: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub item_id: String,
    pub prediction: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory).post(create_item))
        .route("/low-stock", get(low_stock))
        .route("/{id}", get(get_item))
        .route("/{id}/stock", put(update_stock))
        .route("/{id}/prediction", get(prediction))
}

/// GET /api/inventory
async fn list_inventory(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    Json(state.store.inventory())
}

/// POST /api/inventory - The id is assigned when omitted.
async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<NewInventoryItem>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    let item = state.store.create_inventory_item(req)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/inventory/low-stock
async fn low_stock(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    Json(state.store.low_stock())
}

/// GET /api/inventory/{id}
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryItem>, ApiError> {
    Ok(Json(state.store.inventory_item(&id)?))
}

/// PUT /api/inventory/{id}/stock
async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StockUpdate>,
) -> Result<Json<InventoryItem>, ApiError> {
    Ok(Json(state.store.update_inventory_stock(&id, req.stock)?))
}

/// GET /api/inventory/{id}/prediction
///
/// Always answers 200 for a known item; the advice falls back to a fixed
/// message when the assistant is unavailable.
async fn prediction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let item = state.store.inventory_item(&id)?;
    let prediction = state.ai.inventory_prediction(&item.history_line()).await;
    Ok(Json(PredictionResponse {
        item_id: item.id,
        prediction,
    }))
}
