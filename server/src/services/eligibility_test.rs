use super::*;
use crate::prediction::{EligibilityPredictor, PredictionError};
use crate::state::test_helpers;
use std::net::Ipv4Addr;
use std::sync::Arc;
use types::{BankOffer, EmploymentStatus, LoanType};

// =========================================================================
// MockPredictor
// =========================================================================

struct MockPredictor {
    response: Result<PredictionResult, PredictionError>,
}

#[async_trait::async_trait]
impl EligibilityPredictor for MockPredictor {
    async fn predict(
        &self,
        _application: &LoanApplication,
    ) -> Result<PredictionResult, PredictionError> {
        match &self.response {
            Ok(result) => Ok(result.clone()),
            Err(PredictionError::ApiResponse { status, body }) => {
                Err(PredictionError::ApiResponse { status: *status, body: body.clone() })
            }
            Err(e) => Err(PredictionError::ApiRequest(e.to_string())),
        }
    }
}

fn mock_state(response: Result<PredictionResult, PredictionError>) -> AppState {
    test_helpers::test_app_state_with_predictor(Arc::new(MockPredictor { response }))
}

fn client_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn valid_application() -> LoanApplication {
    LoanApplication {
        age: 35,
        income: 60_000.0,
        employment_status: EmploymentStatus::Employed,
        loan_amount: 500_000.0,
        loan_tenure_months: 60,
        credit_score: 710,
        existing_liabilities: 5_000.0,
        loan_type: LoanType::Personal,
    }
}

fn upstream_result() -> PredictionResult {
    PredictionResult {
        is_eligible: true,
        confidence: 82.0,
        message: "Good profile.".to_owned(),
        suggested_amount: None,
        bank_offers: vec![BankOffer {
            bank_name: "HDFC Bank".to_owned(),
            interest_rate: 10.5,
            min_income: 25_000.0,
            min_credit_score: 700.0,
            max_loan_amount: Some(2_000_000.0),
            processing_fee: "1%".to_owned(),
            special_note: String::new(),
        }],
    }
}

// =========================================================================
// check_eligibility
// =========================================================================

#[tokio::test]
async fn happy_path_returns_normalized_result() {
    let state = mock_state(Ok(upstream_result()));
    let result = check_eligibility(&state, client_ip(), &valid_application())
        .await
        .unwrap();
    assert!(result.is_eligible);
    assert_eq!(result.bank_offers.len(), 1);
}

#[tokio::test]
async fn invalid_application_is_rejected_before_prediction() {
    let state = mock_state(Ok(upstream_result()));
    let mut application = valid_application();
    application.age = 10;
    let err = check_eligibility(&state, client_ip(), &application)
        .await
        .unwrap_err();
    assert!(matches!(err, EligibilityError::Validation(_)));
}

#[tokio::test]
async fn unconfigured_predictor_errors() {
    let state = test_helpers::test_app_state();
    let err = check_eligibility(&state, client_ip(), &valid_application())
        .await
        .unwrap_err();
    assert!(matches!(err, EligibilityError::PredictorNotConfigured));
}

#[tokio::test]
async fn upstream_failure_is_wrapped() {
    let state = mock_state(Err(PredictionError::ApiResponse {
        status: 500,
        body: "boom".to_owned(),
    }));
    let err = check_eligibility(&state, client_ip(), &valid_application())
        .await
        .unwrap_err();
    assert!(matches!(err, EligibilityError::Prediction(_)));
}

#[tokio::test]
async fn rate_limit_kicks_in_after_per_client_budget() {
    let state = mock_state(Ok(upstream_result()));
    let application = valid_application();
    // Default per-client budget is 10/min.
    for _ in 0..10 {
        check_eligibility(&state, client_ip(), &application)
            .await
            .unwrap();
    }
    let err = check_eligibility(&state, client_ip(), &application)
        .await
        .unwrap_err();
    assert!(matches!(err, EligibilityError::RateLimited(_)));
}

// =========================================================================
// normalize_result
// =========================================================================

#[test]
fn normalize_fills_empty_message() {
    let mut upstream = upstream_result();
    upstream.message = "   ".to_owned();
    let result = normalize_result(upstream);
    assert_eq!(result.message, FALLBACK_MESSAGE);
}

#[test]
fn normalize_keeps_real_message() {
    let result = normalize_result(upstream_result());
    assert_eq!(result.message, "Good profile.");
}

#[test]
fn normalize_clamps_confidence() {
    let mut upstream = upstream_result();
    upstream.confidence = 180.0;
    assert!((normalize_result(upstream.clone()).confidence - 100.0).abs() < f64::EPSILON);
    upstream.confidence = -5.0;
    assert!(normalize_result(upstream.clone()).confidence.abs() < f64::EPSILON);
    upstream.confidence = f64::NAN;
    assert!(normalize_result(upstream).confidence.abs() < f64::EPSILON);
}
