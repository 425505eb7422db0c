//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional prediction client (behind the mockable trait) and the
//! in-memory rate limiter.

use std::sync::Arc;

use crate::prediction::EligibilityPredictor;
use crate::rate_limit::RateLimiter;

/// Shared application state. Clone is required by Axum — inner fields are
/// Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional prediction client. `None` if `PREDICTION_API_URL` is unset;
    /// the eligibility endpoint then answers 503.
    pub predictor: Option<Arc<dyn EligibilityPredictor>>,
    /// In-memory rate limiter for eligibility checks.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(predictor: Option<Arc<dyn EligibilityPredictor>>) -> Self {
        Self { predictor, rate_limiter: RateLimiter::new() }
    }
}
