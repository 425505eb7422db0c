//! Shared domain model for the loan-advisory application.
//!
//! This crate owns the types that cross the client/server boundary: the loan
//! application payload, the prediction envelope returned by the upstream
//! eligibility service, and the bank-offer and rate-quote records rendered by
//! the UI. Wire field names follow the upstream service contract (camelCase
//! envelope, snake_case bank offers) and must not drift.

pub mod validate;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Applicant employment status, as accepted by the prediction service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Business,
    Retired,
}

impl EmploymentStatus {
    /// All statuses, in form display order.
    pub const ALL: [Self; 4] = [Self::Employed, Self::SelfEmployed, Self::Business, Self::Retired];

    /// Wire value sent to the prediction service (e.g. `"self-employed"`).
    #[must_use]
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self-employed",
            Self::Business => "business",
            Self::Retired => "retired",
        }
    }

    /// Label shown in the employment-status select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Employed => "Employed",
            Self::SelfEmployed => "Self Employed",
            Self::Business => "Business",
            Self::Retired => "Retired",
        }
    }

    /// Parse a wire value back into a status.
    #[must_use]
    pub fn from_wire_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_wire_str() == raw)
    }
}

/// Product category of the requested loan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Personal,
    Education,
    Home,
    Vehicle,
}

impl LoanType {
    /// All loan types, in form display order.
    pub const ALL: [Self; 4] = [Self::Personal, Self::Education, Self::Home, Self::Vehicle];

    /// Wire value sent to the prediction service.
    #[must_use]
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Education => "education",
            Self::Home => "home",
            Self::Vehicle => "vehicle",
        }
    }

    /// Label shown in the loan-type select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Loan",
            Self::Education => "Education Loan",
            Self::Home => "Home Loan",
            Self::Vehicle => "Vehicle Loan",
        }
    }

    /// Parse a wire value back into a loan type.
    #[must_use]
    pub fn from_wire_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loan_type| loan_type.as_wire_str() == raw)
    }
}

// =============================================================================
// ELIGIBILITY WIRE TYPES
// =============================================================================

/// Applicant financial profile posted to the eligibility endpoint and
/// forwarded verbatim to the prediction service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    /// Applicant age in years.
    pub age: u32,
    /// Monthly income in rupees.
    pub income: f64,
    /// Current employment status.
    pub employment_status: EmploymentStatus,
    /// Requested loan amount in rupees.
    pub loan_amount: f64,
    /// Requested tenure in months. The upstream key is `loanTenure`.
    #[serde(rename = "loanTenure")]
    pub loan_tenure_months: u32,
    /// Credit score on the 300-900 scale; `0` means the applicant did not
    /// provide one, which the prediction service treats as unknown.
    pub credit_score: u32,
    /// Existing monthly liabilities (EMIs, card bills) in rupees.
    pub existing_liabilities: f64,
    /// Product category of the requested loan.
    pub loan_type: LoanType,
}

/// Decision envelope returned by the eligibility prediction service.
///
/// Every field except `isEligible` has been observed missing from real
/// responses, so deserialization defaults rather than fails. Display-level
/// guarantees (fallback message text, clamped confidence) are applied by the
/// server's normalization pass, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Binary eligibility decision.
    #[serde(default)]
    pub is_eligible: bool,
    /// Model confidence as a percentage. Zero means "not reported" and
    /// suppresses the confidence line in the UI.
    #[serde(default)]
    pub confidence: f64,
    /// Free-text explanation of the decision.
    #[serde(default)]
    pub message: String,
    /// Alternative amount suggested when the requested one is declined.
    #[serde(default)]
    pub suggested_amount: Option<f64>,
    /// Offers from partner banks matching the applicant profile.
    #[serde(default)]
    pub bank_offers: Vec<BankOffer>,
}

/// One lender's terms, displayed verbatim in the offers table.
///
/// Unlike the camelCase envelope, offers arrive in snake_case; that upstream
/// quirk is part of the contract and is preserved here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankOffer {
    /// Lender display name.
    pub bank_name: String,
    /// Advertised annual interest rate in percent.
    #[serde(default)]
    pub interest_rate: f64,
    /// Minimum monthly income required, in rupees.
    #[serde(default)]
    pub min_income: f64,
    /// Minimum credit score required.
    #[serde(default)]
    pub min_credit_score: f64,
    /// Maximum loan amount in rupees, when the lender caps it.
    #[serde(default)]
    pub max_loan_amount: Option<f64>,
    /// Processing fee, shown as-is. Upstream sends either a string
    /// (`"1% of amount"`) or a bare number.
    #[serde(default, deserialize_with = "deserialize_fee_string")]
    pub processing_fee: String,
    /// Short remark attached to the offer.
    #[serde(default)]
    pub special_note: String,
}

// =============================================================================
// RATE-COMPARISON TYPES
// =============================================================================

/// Input to the interest-rate comparison: what the applicant wants to borrow
/// and their credit standing. Never leaves the client.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateRequest {
    /// Requested principal.
    pub loan_amount: f64,
    /// Repayment period in months.
    pub loan_tenure_months: u32,
    /// Credit score on the 300-900 scale (required on this form).
    pub credit_score: u32,
}

/// One bank's simulated quote for a rate request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    /// Lender display name.
    pub bank_name: String,
    /// Effective annual interest rate in percent, after credit adjustment.
    pub interest_rate: f64,
    /// Amortized monthly payment.
    pub monthly_payment: f64,
    /// Total paid over the full tenure.
    pub total_payment: f64,
}

// =============================================================================
// TOLERANT DESERIALIZATION
// =============================================================================

fn deserialize_fee_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(format_fee_number(number.as_f64().unwrap_or(0.0))),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number for processing fee")),
    }
}

fn format_fee_number(fee: f64) -> String {
    if fee.fract() == 0.0 && fee.abs() < 1e15 {
        format!("{fee:.0}")
    } else {
        format!("{fee}")
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
