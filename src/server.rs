use axum::{
    Router,
    extract::{DefaultBodyLimit, Request, State},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::ai::{AiService, GeminiClient};
use crate::api;
use crate::config::AppConfig;
use crate::security::rate_limit::{AppRateLimiter, rate_limit_middleware};
use crate::store::ShopStore;

/// Generated blog images come back inline, so bodies can be large.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Assemble the full application router around `state`.
///
/// Layers, outermost first: trace, CORS, rate limit, timeout, body limit.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let mut app = api::router();
    if state.metrics.is_some() {
        app = app.route("/metrics", get(render_metrics));
    }

    app.layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(request_timeout, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => {
                        tracing::warn!(name: "server.request.timeout", timeout_secs = request_timeout.as_secs(), "Request timed out");
                        (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                    }
                }
            },
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /metrics - Prometheus text format.
async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let store_settings = config.store_settings();
    let store = if config.shop.seed_demo_data {
        ShopStore::seeded(store_settings)
    } else {
        ShopStore::new(store_settings)
    };

    let ai_settings = config.ai_settings();
    info!(
        name: "ai.config.loaded",
        base_url = %ai_settings.base_url,
        text_model = %ai_settings.text_model,
        image_model = %ai_settings.image_model,
        configured = ai_settings.api_key.is_some(),
        "AI configuration loaded"
    );
    let client = GeminiClient::new(ai_settings.clone())?;
    let ai = AiService::new(Arc::new(client), &ai_settings);

    let limiter = AppRateLimiter::new(
        config.resilience.requests_per_second,
        config.resilience.burst_size,
        config.resilience.rate_limit_enabled,
    );

    let mut state = AppState::new(store, ai).with_rate_limiter(limiter);
    if config.telemetry.metrics_enabled {
        let handle = PrometheusBuilder::new().install_recorder()?;
        state = state.with_metrics(handle);
    }

    let app = build_router(state, config.request_timeout());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        rate_limit_enabled = config.resilience.rate_limit_enabled,
        metrics_enabled = config.telemetry.metrics_enabled,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
