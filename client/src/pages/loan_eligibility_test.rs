use super::*;

fn complete_input() -> EligibilityFormInput {
    EligibilityFormInput {
        age: "32".to_owned(),
        income: "85000".to_owned(),
        employment_status: "self-employed".to_owned(),
        loan_amount: "1200000".to_owned(),
        loan_tenure: "120".to_owned(),
        credit_score: "742".to_owned(),
        existing_liabilities: "18500".to_owned(),
        loan_type: "home".to_owned(),
    }
}

#[test]
fn parses_a_complete_form() {
    let application = parse_eligibility_form(&complete_input()).unwrap();
    assert_eq!(application.age, 32);
    assert_eq!(application.employment_status, EmploymentStatus::SelfEmployed);
    assert_eq!(application.loan_type, LoanType::Home);
    assert_eq!(application.credit_score, 742);
}

#[test]
fn empty_credit_score_becomes_unknown_sentinel() {
    let mut input = complete_input();
    input.credit_score = String::new();
    let application = parse_eligibility_form(&input).unwrap();
    assert_eq!(application.credit_score, 0);

    input.credit_score = "   ".to_owned();
    let application = parse_eligibility_form(&input).unwrap();
    assert_eq!(application.credit_score, 0);
}

#[test]
fn unselected_dropdowns_are_rejected() {
    let mut input = complete_input();
    input.employment_status = String::new();
    assert_eq!(
        parse_eligibility_form(&input).unwrap_err(),
        "Select an employment status."
    );

    let mut input = complete_input();
    input.loan_type = String::new();
    assert_eq!(parse_eligibility_form(&input).unwrap_err(), "Select a loan type.");
}

#[test]
fn unparseable_fields_report_first() {
    let mut input = complete_input();
    input.age = "abc".to_owned();
    assert_eq!(parse_eligibility_form(&input).unwrap_err(), "Enter your age.");

    let mut input = complete_input();
    input.income = String::new();
    assert_eq!(
        parse_eligibility_form(&input).unwrap_err(),
        "Enter your monthly income."
    );
}

#[test]
fn range_validation_messages_pass_through() {
    let mut input = complete_input();
    input.age = "17".to_owned();
    assert_eq!(
        parse_eligibility_form(&input).unwrap_err(),
        "age must be between 18 and 80"
    );

    let mut input = complete_input();
    input.loan_tenure = "3".to_owned();
    assert_eq!(
        parse_eligibility_form(&input).unwrap_err(),
        "loan tenure must be between 6 and 360 months"
    );
}

#[test]
fn whitespace_around_fields_is_tolerated() {
    let mut input = complete_input();
    input.age = " 32 ".to_owned();
    input.employment_status = " self-employed ".to_owned();
    assert!(parse_eligibility_form(&input).is_ok());
}
