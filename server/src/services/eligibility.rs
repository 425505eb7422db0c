//! Eligibility service — validate, rate-limit, predict, normalize.
//!
//! DESIGN
//! ======
//! The route handler stays a thin status-code mapper; everything between the
//! JSON body and the prediction client lives here. Normalization guarantees
//! the client never renders an empty message, a missing offer list, or a
//! confidence outside 0..=100, whatever the upstream sends.

use std::net::IpAddr;

use tracing::{info, warn};
use types::validate::{ValidationError, validate_application};
use types::{LoanApplication, PredictionResult};
use uuid::Uuid;

use crate::state::AppState;

/// Shown when the upstream decision carries no explanation.
pub const FALLBACK_MESSAGE: &str = "No detailed explanation available";

#[derive(Debug, thiserror::Error)]
pub enum EligibilityError {
    #[error("invalid application: {0}")]
    Validation(#[from] ValidationError),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("prediction service not configured")]
    PredictorNotConfigured,
    #[error("prediction failed: {0}")]
    Prediction(#[from] crate::prediction::PredictionError),
}

impl From<crate::rate_limit::RateLimitError> for EligibilityError {
    fn from(e: crate::rate_limit::RateLimitError) -> Self {
        Self::RateLimited(e.to_string())
    }
}

/// Run one eligibility check end to end.
///
/// # Errors
///
/// Returns [`EligibilityError`] for invalid payloads, exhausted rate
/// windows, an unconfigured predictor, or upstream failures.
pub async fn check_eligibility(
    state: &AppState,
    client_ip: IpAddr,
    application: &LoanApplication,
) -> Result<PredictionResult, EligibilityError> {
    validate_application(application)?;
    state.rate_limiter.check_and_record(client_ip)?;

    let Some(predictor) = &state.predictor else {
        return Err(EligibilityError::PredictorNotConfigured);
    };

    let correlation_id = Uuid::new_v4();
    info!(
        %correlation_id,
        %client_ip,
        loan_type = application.loan_type.as_wire_str(),
        loan_amount = application.loan_amount,
        "eligibility: calling prediction service"
    );

    match predictor.predict(application).await {
        Ok(result) => {
            let result = normalize_result(result);
            info!(
                %correlation_id,
                is_eligible = result.is_eligible,
                confidence = result.confidence,
                offers = result.bank_offers.len(),
                "eligibility: decision received"
            );
            Ok(result)
        }
        Err(e) => {
            warn!(%correlation_id, error = %e, "eligibility: prediction failed");
            Err(e.into())
        }
    }
}

/// Apply display-level guarantees to an upstream decision.
pub fn normalize_result(mut result: PredictionResult) -> PredictionResult {
    if result.message.trim().is_empty() {
        result.message = FALLBACK_MESSAGE.to_owned();
    }
    result.confidence = if result.confidence.is_finite() {
        result.confidence.clamp(0.0, 100.0)
    } else {
        0.0
    };
    result
}

#[cfg(test)]
#[path = "eligibility_test.rs"]
mod tests;
