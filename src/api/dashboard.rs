use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;
use crate::store::DashboardSummary;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(summary))
        .route("/insights", get(insights))
}

/// GET /api/dashboard
async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.store.dashboard_summary())
}

/// GET /api/dashboard/insights - Never fails; falls back to stock tips.
async fn insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    let digest = state.store.dashboard_summary().digest();
    Json(InsightsResponse {
        insights: state.ai.insights(&digest).await,
    })
}
