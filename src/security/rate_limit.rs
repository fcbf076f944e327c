use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;

/// Global token bucket shared by every route.
///
/// Not keyed by client address; the shop runs behind a single front end.
pub struct AppRateLimiter {
    limiter: DefaultDirectRateLimiter,
    enabled: bool,
}

impl std::fmt::Debug for AppRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRateLimiter")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl AppRateLimiter {
    /// Zero rates are clamped to one.
    pub fn new(requests_per_second: u32, burst_size: u32, enabled: bool) -> Self {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::direct(Quota::per_second(rate).allow_burst(burst)),
            enabled,
        }
    }

    /// A limiter that lets everything through.
    pub fn disabled() -> Self {
        Self::new(1, 1, false)
    }

    /// Take one token. Always succeeds when disabled.
    pub fn check(&self) -> bool {
        !self.enabled || self.limiter.check().is_ok()
    }
}

/// Middleware to enforce rate limits
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if !state.rate_limiter.check() {
        tracing::warn!(name: "server.rate_limited", path = %req.uri().path(), "Request rate limited");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_then_reject() {
        let limiter = AppRateLimiter::new(1, 3, true);

        assert!(limiter.check());
        assert!(limiter.check());
        assert!(limiter.check());

        // Burst exhausted, refill takes a second.
        assert!(!limiter.check());
    }

    #[test]
    fn test_disabled_never_rejects() {
        let limiter = AppRateLimiter::disabled();
        for _ in 0..100 {
            assert!(limiter.check());
        }
    }
}
