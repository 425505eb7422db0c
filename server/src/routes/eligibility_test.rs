use super::*;
use crate::prediction::PredictionError;
use types::validate::ValidationError;

#[test]
fn validation_maps_to_422() {
    let status = eligibility_error_to_status(EligibilityError::Validation(
        ValidationError::AgeOutOfRange,
    ));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn rate_limited_maps_to_429() {
    let status = eligibility_error_to_status(EligibilityError::RateLimited("busy".to_owned()));
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn unconfigured_maps_to_503() {
    let status = eligibility_error_to_status(EligibilityError::PredictorNotConfigured);
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn upstream_failures_map_to_502() {
    for err in [
        PredictionError::ApiRequest("timeout".to_owned()),
        PredictionError::ApiResponse { status: 500, body: "boom".to_owned() },
        PredictionError::ApiParse("bad json".to_owned()),
    ] {
        let status = eligibility_error_to_status(EligibilityError::Prediction(err));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
