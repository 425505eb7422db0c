use super::*;

#[test]
fn parses_a_complete_form() {
    let request = parse_rate_form("50000", "60", "780").unwrap();
    assert!((request.loan_amount - 50_000.0).abs() < f64::EPSILON);
    assert_eq!(request.loan_tenure_months, 60);
    assert_eq!(request.credit_score, 780);
}

#[test]
fn trims_whitespace() {
    assert!(parse_rate_form(" 50000 ", " 60 ", " 780 ").is_ok());
}

#[test]
fn unparseable_fields_report_in_form_order() {
    assert_eq!(
        parse_rate_form("abc", "60", "780").unwrap_err(),
        "Enter a valid loan amount."
    );
    assert_eq!(
        parse_rate_form("50000", "", "780").unwrap_err(),
        "Enter the loan tenure in months."
    );
    assert_eq!(
        parse_rate_form("50000", "60", "").unwrap_err(),
        "Enter your credit score."
    );
}

#[test]
fn validation_messages_pass_through() {
    assert_eq!(
        parse_rate_form("500", "60", "780").unwrap_err(),
        "loan amount must be at least 1000"
    );
    assert_eq!(
        parse_rate_form("50000", "6", "780").unwrap_err(),
        "loan tenure must be between 12 and 360 months"
    );
    assert_eq!(
        parse_rate_form("50000", "60", "200").unwrap_err(),
        "credit score must be between 300 and 900"
    );
}
