use super::*;

fn sample_application() -> LoanApplication {
    LoanApplication {
        age: 32,
        income: 85_000.0,
        employment_status: EmploymentStatus::SelfEmployed,
        loan_amount: 1_200_000.0,
        loan_tenure_months: 120,
        credit_score: 742,
        existing_liabilities: 18_500.0,
        loan_type: LoanType::Home,
    }
}

// ===== application wire shape =====

#[test]
fn application_serializes_with_upstream_keys() {
    let value = serde_json::to_value(sample_application()).unwrap();
    assert_eq!(value["age"], 32);
    assert_eq!(value["income"], 85_000.0);
    assert_eq!(value["employmentStatus"], "self-employed");
    assert_eq!(value["loanAmount"], 1_200_000.0);
    assert_eq!(value["loanTenure"], 120);
    assert_eq!(value["creditScore"], 742);
    assert_eq!(value["existingLiabilities"], 18_500.0);
    assert_eq!(value["loanType"], "home");
}

#[test]
fn application_round_trips() {
    let original = sample_application();
    let json = serde_json::to_string(&original).unwrap();
    let restored: LoanApplication = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

// ===== prediction envelope =====

#[test]
fn prediction_result_defaults_missing_fields() {
    let json = r#"{ "isEligible": true, "confidence": 82.5 }"#;
    let result: PredictionResult = serde_json::from_str(json).unwrap();
    assert!(result.is_eligible);
    assert!((result.confidence - 82.5).abs() < f64::EPSILON);
    assert!(result.message.is_empty());
    assert_eq!(result.suggested_amount, None);
    assert!(result.bank_offers.is_empty());
}

#[test]
fn prediction_result_parses_full_envelope() {
    let json = serde_json::json!({
        "isEligible": false,
        "confidence": 41.0,
        "message": "Debt-to-income ratio too high.",
        "suggestedAmount": 350_000.0,
        "bankOffers": [{
            "bank_name": "HDFC Bank",
            "interest_rate": 10.5,
            "min_income": 25_000,
            "min_credit_score": 650,
            "max_loan_amount": 4_000_000,
            "processing_fee": "0.5% of loan amount",
            "special_note": "Salaried applicants only"
        }]
    })
    .to_string();

    let result: PredictionResult = serde_json::from_str(&json).unwrap();
    assert!(!result.is_eligible);
    assert_eq!(result.suggested_amount, Some(350_000.0));
    assert_eq!(result.bank_offers.len(), 1);
    let offer = &result.bank_offers[0];
    assert_eq!(offer.bank_name, "HDFC Bank");
    assert_eq!(offer.max_loan_amount, Some(4_000_000.0));
    assert_eq!(offer.processing_fee, "0.5% of loan amount");
}

// ===== bank offer tolerance =====

#[test]
fn bank_offer_accepts_numeric_processing_fee() {
    let json = r#"{ "bank_name": "SBI", "interest_rate": 9.6, "min_income": 20000,
                    "min_credit_score": 700, "processing_fee": 2500 }"#;
    let offer: BankOffer = serde_json::from_str(json).unwrap();
    assert_eq!(offer.processing_fee, "2500");
    assert_eq!(offer.max_loan_amount, None);
    assert!(offer.special_note.is_empty());
}

#[test]
fn bank_offer_accepts_fractional_processing_fee() {
    let json = r#"{ "bank_name": "SBI", "processing_fee": 1.5 }"#;
    let offer: BankOffer = serde_json::from_str(json).unwrap();
    assert_eq!(offer.processing_fee, "1.5");
}

#[test]
fn bank_offer_rejects_structured_processing_fee() {
    let json = r#"{ "bank_name": "SBI", "processing_fee": {"pct": 1} }"#;
    assert!(serde_json::from_str::<BankOffer>(json).is_err());
}

// ===== enumerations =====

#[test]
fn employment_status_wire_values_round_trip() {
    for status in EmploymentStatus::ALL {
        let wire = serde_json::to_value(status).unwrap();
        assert_eq!(wire, status.as_wire_str());
        assert_eq!(EmploymentStatus::from_wire_str(status.as_wire_str()), Some(status));
    }
    assert_eq!(EmploymentStatus::from_wire_str("self-employed"), Some(EmploymentStatus::SelfEmployed));
    assert_eq!(EmploymentStatus::from_wire_str("freelance"), None);
}

#[test]
fn loan_type_wire_values_round_trip() {
    for loan_type in LoanType::ALL {
        let wire = serde_json::to_value(loan_type).unwrap();
        assert_eq!(wire, loan_type.as_wire_str());
        assert_eq!(LoanType::from_wire_str(loan_type.as_wire_str()), Some(loan_type));
    }
    assert_eq!(LoanType::Personal.label(), "Personal Loan");
    assert_eq!(LoanType::from_wire_str("payday"), None);
}

// ===== rate quote =====

#[test]
fn rate_quote_serializes_camel_case() {
    let quote = RateQuote {
        bank_name: "First National Bank".to_owned(),
        interest_rate: 5.99,
        monthly_payment: 1_250.0,
        total_payment: 150_000.0,
    };
    let value = serde_json::to_value(&quote).unwrap();
    assert_eq!(value["bankName"], "First National Bank");
    assert_eq!(value["interestRate"], 5.99);
    assert_eq!(value["monthlyPayment"], 1_250.0);
    assert_eq!(value["totalPayment"], 150_000.0);
}
