//! Result panel for the loan-eligibility page.
//!
//! Renders the decision line, the optional confidence score, the free-text
//! explanation, a suggested amount for declined applications, and the
//! bank-offers table when the service returned any.

#[cfg(test)]
#[path = "eligibility_result_test.rs"]
mod eligibility_result_test;

use leptos::prelude::*;

use crate::net::types::{BankOffer, PredictionResult};
use crate::util::money::format_rupees;

/// Confidence values above this render in the "high" style.
const HIGH_CONFIDENCE_THRESHOLD: f64 = 70.0;

fn decision_label(is_eligible: bool) -> &'static str {
    if is_eligible { "✓ Eligible for Loan" } else { "✗ Not Eligible for Loan" }
}

fn decision_class(is_eligible: bool) -> &'static str {
    if is_eligible { "eligibility-result__decision--yes" } else { "eligibility-result__decision--no" }
}

fn confidence_class(confidence: f64) -> &'static str {
    if confidence > HIGH_CONFIDENCE_THRESHOLD {
        "eligibility-result__confidence--high"
    } else {
        "eligibility-result__confidence--medium"
    }
}

fn format_confidence(confidence: f64) -> String {
    format!("{confidence:.1}%")
}

/// Max-loan column value: `-` when the lender does not cap it.
fn max_loan_display(max_loan_amount: Option<f64>) -> String {
    max_loan_amount.map_or_else(|| "-".to_owned(), format_rupees)
}

/// The suggested-amount box shows only for declined applications that carry
/// a positive alternative; a zero suggestion means "nothing to suggest".
fn show_suggestion(result: &PredictionResult) -> bool {
    !result.is_eligible && result.suggested_amount.is_some_and(|amount| amount > 0.0)
}

#[component]
fn OfferRow(offer: BankOffer) -> impl IntoView {
    view! {
        <tr>
            <td>{offer.bank_name.clone()}</td>
            <td>{offer.interest_rate}</td>
            <td>{format_rupees(offer.min_income)}</td>
            <td>{offer.min_credit_score}</td>
            <td>{max_loan_display(offer.max_loan_amount)}</td>
            <td>{offer.processing_fee.clone()}</td>
            <td>{offer.special_note.clone()}</td>
        </tr>
    }
}

/// Eligibility decision panel.
#[component]
pub fn EligibilityResult(result: PredictionResult) -> impl IntoView {
    let suggestion = show_suggestion(&result).then(|| result.suggested_amount.unwrap_or_default());
    let confidence = result.confidence;
    let offers = result.bank_offers.clone();

    view! {
        <div class="eligibility-result">
            <h2 class="eligibility-result__title">"Eligibility Result"</h2>
            <div class=format!("eligibility-result__decision {}", decision_class(result.is_eligible))>
                {decision_label(result.is_eligible)}
            </div>
            <Show when={move || confidence > 0.0}>
                <div class="eligibility-result__confidence-line">
                    <span class="eligibility-result__label">"Confidence Score: "</span>
                    <span class=confidence_class(confidence)>{format_confidence(confidence)}</span>
                </div>
            </Show>
            <div class="eligibility-result__message">{result.message.clone()}</div>
            {suggestion
                .map(|amount| {
                    view! {
                        <div class="eligibility-result__suggestion">
                            <span class="eligibility-result__label">"Suggested Loan Amount: "</span>
                            {format_rupees(amount)}
                        </div>
                    }
                })}
            <Show when={
                let has_offers = !offers.is_empty();
                move || has_offers
            }>
                <div class="eligibility-result__offers">
                    <h3>"Top Indian Bank Offers"</h3>
                    <table class="eligibility-result__offers-table">
                        <thead>
                            <tr>
                                <th>"Bank"</th>
                                <th>"Interest Rate (%)"</th>
                                <th>"Min Income (₹)"</th>
                                <th>"Min Credit Score"</th>
                                <th>"Max Loan (₹)"</th>
                                <th>"Processing Fee"</th>
                                <th>"Note"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {offers
                                .clone()
                                .into_iter()
                                .map(|offer| view! { <OfferRow offer=offer/> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
