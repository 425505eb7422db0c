use super::*;

#[test]
fn parse_full_envelope() {
    let json = r#"{
        "isEligible": true,
        "confidence": 88.2,
        "message": "Approved.",
        "suggestedAmount": null,
        "bankOffers": [{
            "bank_name": "HDFC Bank",
            "interest_rate": 10.5,
            "min_income": 25000,
            "min_credit_score": 700,
            "max_loan_amount": 2000000,
            "processing_fee": "1% of loan amount",
            "special_note": "Salaried applicants only"
        }]
    }"#;

    let result = parse_response(json).unwrap();
    assert!(result.is_eligible);
    assert!((result.confidence - 88.2).abs() < f64::EPSILON);
    assert_eq!(result.bank_offers.len(), 1);
    assert_eq!(result.bank_offers[0].bank_name, "HDFC Bank");
    assert_eq!(result.bank_offers[0].processing_fee, "1% of loan amount");
}

#[test]
fn parse_minimal_envelope_defaults_rest() {
    let result = parse_response(r#"{"isEligible": false}"#).unwrap();
    assert!(!result.is_eligible);
    assert!(result.message.is_empty());
    assert!(result.bank_offers.is_empty());
    assert_eq!(result.suggested_amount, None);
}

#[test]
fn parse_numeric_processing_fee() {
    let json = r#"{
        "isEligible": true,
        "bankOffers": [{ "bank_name": "SBI", "processing_fee": 2500 }]
    }"#;
    let result = parse_response(json).unwrap();
    assert_eq!(result.bank_offers[0].processing_fee, "2500");
}

#[test]
fn parse_garbage_is_an_api_parse_error() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, PredictionError::ApiParse(_)));
}

#[test]
fn client_builds_from_config() {
    let config = PredictionConfig {
        base_url: "https://predict.example.test".to_owned(),
        api_key: Some("secret".to_owned()),
        timeouts: super::super::config::PredictionTimeouts { request_secs: 30, connect_secs: 10 },
    };
    let client = PredictionClient::from_config(config).unwrap();
    assert_eq!(client.base_url(), "https://predict.example.test");
}
