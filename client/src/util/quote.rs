//! Interest-rate quote simulation.
//!
//! The comparison page never talks to a server: quotes come from a static
//! partner-bank catalogue, priced with a credit-score spread on top of each
//! bank's base rate and amortized with the standard EMI formula.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use types::{RateQuote, RateRequest};

/// One partner bank's advertised base terms.
#[derive(Clone, Copy)]
pub struct BankRate {
    pub name: &'static str,
    /// Base annual rate in percent, before the credit-score spread.
    pub base_rate: f64,
}

/// Partner banks quoted on the comparison page, in catalogue order.
pub const BANK_CATALOGUE: [BankRate; 3] = [
    BankRate { name: "First National Bank", base_rate: 5.99 },
    BankRate { name: "City Trust", base_rate: 6.25 },
    BankRate { name: "Global Finance", base_rate: 6.49 },
];

/// Annual-rate spread (percentage points) added for a credit score.
#[must_use]
pub fn credit_spread(credit_score: u32) -> f64 {
    match credit_score {
        750.. => 0.0,
        700..=749 => 0.35,
        650..=699 => 0.85,
        _ => 1.60,
    }
}

/// Standard EMI amortization: `P * r(1+r)^n / ((1+r)^n - 1)` with monthly
/// rate `r`. A zero rate degrades to straight division of the principal.
#[must_use]
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = f64::from(months);
    let r = annual_rate_percent / 100.0 / 12.0;
    if r <= 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

/// Produce one quote per catalogue bank, sorted ascending by effective rate.
///
/// The sort is stable, so rate ties keep catalogue order and the first row
/// is always the "best rate".
#[must_use]
pub fn simulate_quotes(request: &RateRequest) -> Vec<RateQuote> {
    let spread = credit_spread(request.credit_score);
    let mut quotes: Vec<RateQuote> = BANK_CATALOGUE
        .iter()
        .map(|bank| {
            let rate = bank.base_rate + spread;
            let monthly = monthly_payment(request.loan_amount, rate, request.loan_tenure_months);
            RateQuote {
                bank_name: bank.name.to_owned(),
                interest_rate: rate,
                monthly_payment: monthly,
                total_payment: monthly * f64::from(request.loan_tenure_months),
            }
        })
        .collect();
    quotes.sort_by(|a, b| a.interest_rate.total_cmp(&b.interest_rate));
    quotes
}
