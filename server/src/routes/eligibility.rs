//! Eligibility check route.

#[cfg(test)]
#[path = "eligibility_test.rs"]
mod eligibility_test;

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use types::{LoanApplication, PredictionResult};

use crate::services::eligibility::{self, EligibilityError};
use crate::state::AppState;

/// `POST /api/eligibility/check` — run one application through the
/// prediction service.
pub async fn check(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(application): Json<LoanApplication>,
) -> Result<Json<PredictionResult>, StatusCode> {
    let result = eligibility::check_eligibility(&state, addr.ip(), &application)
        .await
        .map_err(eligibility_error_to_status)?;
    Ok(Json(result))
}

fn eligibility_error_to_status(e: EligibilityError) -> StatusCode {
    match e {
        EligibilityError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EligibilityError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        EligibilityError::PredictorNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        EligibilityError::Prediction(_) => StatusCode::BAD_GATEWAY,
    }
}
