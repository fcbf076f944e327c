//! Biskaken Shop
//!
//! Back end for an auto-repair shop: customer records, job orders,
//! inventory, invoicing, a small blog, and an AI assistant for diagnosis and
//! content, served as a JSON API.
//!
//! # Architecture
//!
//! - **Server**: Axum router with trace, timeout and rate limit middleware
//! - **Store**: in-memory shop state with derived views (job board filter,
//!   low-stock alerts, invoice payment accounting)
//! - **AI**: Gemini-backed adapter behind the [`ai::GenerativeModel`] trait
//!
//! # Modules
//!
//! - [`api`]: HTTP handlers
//! - [`ai`]: generative-AI adapter
//! - [`catalog`]: fixed lookup lists and mock accounts
//! - [`domain`]: shop records
//! - [`store`]: state store and views

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod ai;
pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod security;
pub mod server;
pub mod store;

use std::sync::Arc;

use ai::AiService;
use metrics_exporter_prometheus::PrometheusHandle;
use security::rate_limit::AppRateLimiter;
use store::ShopStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shop records.
    pub store: ShopStore,
    /// AI assistant.
    pub ai: AiService,
    /// Global Rate Limiter
    pub rate_limiter: Arc<AppRateLimiter>,
    /// Prometheus renderer, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// State with rate limiting off and no metrics endpoint.
    #[must_use]
    pub fn new(store: ShopStore, ai: AiService) -> Self {
        Self {
            store,
            ai,
            rate_limiter: Arc::new(AppRateLimiter::disabled()),
            metrics: None,
        }
    }

    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: AppRateLimiter) -> Self {
        self.rate_limiter = Arc::new(limiter);
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
