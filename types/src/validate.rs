//! Field-range validation shared by the form pages and the API surface.
//!
//! Both sides run the same checks: the client for inline feedback before
//! anything is sent, the server to reject payloads that bypassed the form.
//! The ranges mirror the HTML input constraints of the original forms.

use crate::{LoanApplication, RateRequest};

/// Minimum applicant age accepted by the eligibility form.
pub const MIN_AGE: u32 = 18;
/// Maximum applicant age accepted by the eligibility form.
pub const MAX_AGE: u32 = 80;
/// Lower bound of the credit-score scale.
pub const MIN_CREDIT_SCORE: u32 = 300;
/// Upper bound of the credit-score scale.
pub const MAX_CREDIT_SCORE: u32 = 900;
/// Tenure bounds for the eligibility form, in months.
pub const ELIGIBILITY_TENURE_MONTHS: (u32, u32) = (6, 360);
/// Tenure bounds for the rate-comparison form, in months.
pub const RATE_TENURE_MONTHS: (u32, u32) = (12, 360);
/// Smallest principal the rate-comparison form will quote.
pub const MIN_RATE_LOAN_AMOUNT: f64 = 1000.0;

/// A failed field check. `Display` gives the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("age must be between {} and {}", MIN_AGE, MAX_AGE)]
    AgeOutOfRange,
    #[error("income must be a non-negative amount")]
    IncomeInvalid,
    #[error("loan amount must be a non-negative amount")]
    LoanAmountInvalid,
    #[error("loan amount must be at least {}", MIN_RATE_LOAN_AMOUNT as u64)]
    LoanAmountBelowMinimum,
    #[error("loan tenure must be between {min} and {max} months")]
    TenureOutOfRange { min: u32, max: u32 },
    #[error("credit score must be between {} and {}", MIN_CREDIT_SCORE, MAX_CREDIT_SCORE)]
    CreditScoreOutOfRange,
    #[error("existing liabilities must be a non-negative amount")]
    LiabilitiesInvalid,
}

impl ValidationError {
    /// Wire name of the offending field, for logs and error payloads.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::AgeOutOfRange => "age",
            Self::IncomeInvalid => "income",
            Self::LoanAmountInvalid | Self::LoanAmountBelowMinimum => "loanAmount",
            Self::TenureOutOfRange { .. } => "loanTenure",
            Self::CreditScoreOutOfRange => "creditScore",
            Self::LiabilitiesInvalid => "existingLiabilities",
        }
    }
}

/// Validate an eligibility application. The first failing check wins.
///
/// A credit score of `0` is the "not provided" sentinel and passes; any other
/// value must sit on the 300-900 scale.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in form field order.
pub fn validate_application(application: &LoanApplication) -> Result<(), ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&application.age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    if !non_negative_money(application.income) {
        return Err(ValidationError::IncomeInvalid);
    }
    if !non_negative_money(application.loan_amount) {
        return Err(ValidationError::LoanAmountInvalid);
    }
    let (min, max) = ELIGIBILITY_TENURE_MONTHS;
    if !(min..=max).contains(&application.loan_tenure_months) {
        return Err(ValidationError::TenureOutOfRange { min, max });
    }
    if application.credit_score != 0
        && !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&application.credit_score)
    {
        return Err(ValidationError::CreditScoreOutOfRange);
    }
    if !non_negative_money(application.existing_liabilities) {
        return Err(ValidationError::LiabilitiesInvalid);
    }
    Ok(())
}

/// Validate a rate-comparison request. The first failing check wins.
///
/// Unlike the eligibility form, the credit score is mandatory here: the quote
/// simulation prices the spread off it.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in form field order.
pub fn validate_rate_request(request: &RateRequest) -> Result<(), ValidationError> {
    if !request.loan_amount.is_finite() {
        return Err(ValidationError::LoanAmountInvalid);
    }
    if request.loan_amount < MIN_RATE_LOAN_AMOUNT {
        return Err(ValidationError::LoanAmountBelowMinimum);
    }
    let (min, max) = RATE_TENURE_MONTHS;
    if !(min..=max).contains(&request.loan_tenure_months) {
        return Err(ValidationError::TenureOutOfRange { min, max });
    }
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&request.credit_score) {
        return Err(ValidationError::CreditScoreOutOfRange);
    }
    Ok(())
}

fn non_negative_money(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
