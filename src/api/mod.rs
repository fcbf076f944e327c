//! JSON HTTP API.
//!
//! Every handler takes [`AppState`] and returns either JSON or an
//! [`ApiError`](crate::error::ApiError).

pub mod blog;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod invoices;
pub mod jobs;
pub mod session;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::AppState;
use crate::catalog::Catalog;

/// All `/api` routes plus `/health`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalog", get(catalog))
        .nest("/api/session", session::router())
        .nest("/api/customers", customers::router())
        .nest("/api/jobs", jobs::router())
        .nest("/api/inventory", inventory::router())
        .nest("/api/invoices", invoices::router())
        .nest("/api/blog", blog::router())
        .nest("/api/dashboard", dashboard::router())
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/catalog - Drop-down lists and mock accounts.
async fn catalog() -> Json<Catalog> {
    Json(Catalog::load())
}
