//! Loan-eligibility check page.
//!
//! Submit parses and validates all eight fields client-side, POSTs the
//! application to the server, and renders the returned decision in the
//! result panel. Errors (validation, transport, server status) land in one
//! banner above the results.

#[cfg(test)]
#[path = "loan_eligibility_test.rs"]
mod loan_eligibility_test;

use leptos::prelude::*;

use crate::components::eligibility_result::EligibilityResult;
use crate::net::types::{EmploymentStatus, LoanApplication, LoanType};
use crate::state::eligibility::EligibilityState;
use types::validate::validate_application;

/// Raw string values of the form, as held in signals.
#[derive(Clone, Debug, Default)]
struct EligibilityFormInput {
    age: String,
    income: String,
    employment_status: String,
    loan_amount: String,
    loan_tenure: String,
    credit_score: String,
    existing_liabilities: String,
    loan_type: String,
}

/// Parse the raw form into a validated [`LoanApplication`].
///
/// The first problem wins and becomes the inline error. An empty credit
/// score is the "unknown" sentinel and parses to 0.
fn parse_eligibility_form(input: &EligibilityFormInput) -> Result<LoanApplication, String> {
    let age: u32 = input.age.trim().parse().map_err(|_| "Enter your age.".to_owned())?;
    let income: f64 = input
        .income
        .trim()
        .parse()
        .map_err(|_| "Enter your monthly income.".to_owned())?;
    let employment_status = EmploymentStatus::from_wire_str(input.employment_status.trim())
        .ok_or_else(|| "Select an employment status.".to_owned())?;
    let loan_amount: f64 = input
        .loan_amount
        .trim()
        .parse()
        .map_err(|_| "Enter the loan amount.".to_owned())?;
    let loan_tenure_months: u32 = input
        .loan_tenure
        .trim()
        .parse()
        .map_err(|_| "Enter the loan tenure in months.".to_owned())?;
    let credit_score: u32 = if input.credit_score.trim().is_empty() {
        0
    } else {
        input
            .credit_score
            .trim()
            .parse()
            .map_err(|_| "Enter a valid credit score or leave it empty.".to_owned())?
    };
    let existing_liabilities: f64 = input
        .existing_liabilities
        .trim()
        .parse()
        .map_err(|_| "Enter your existing monthly liabilities.".to_owned())?;
    let loan_type = LoanType::from_wire_str(input.loan_type.trim())
        .ok_or_else(|| "Select a loan type.".to_owned())?;

    let application = LoanApplication {
        age,
        income,
        employment_status,
        loan_amount,
        loan_tenure_months,
        credit_score,
        existing_liabilities,
        loan_type,
    };
    validate_application(&application).map_err(|e| e.to_string())?;
    Ok(application)
}

#[component]
pub fn LoanEligibilityPage() -> impl IntoView {
    let state = expect_context::<RwSignal<EligibilityState>>();

    let age = RwSignal::new(String::new());
    let income = RwSignal::new(String::new());
    let employment_status = RwSignal::new(String::new());
    let loan_amount = RwSignal::new(String::new());
    let loan_tenure = RwSignal::new(String::new());
    let credit_score = RwSignal::new(String::new());
    let existing_liabilities = RwSignal::new(String::new());
    let loan_type = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with(|s| s.submitting) {
            return;
        }
        let input = EligibilityFormInput {
            age: age.get(),
            income: income.get(),
            employment_status: employment_status.get(),
            loan_amount: loan_amount.get(),
            loan_tenure: loan_tenure.get(),
            credit_score: credit_score.get(),
            existing_liabilities: existing_liabilities.get(),
            loan_type: loan_type.get(),
        };
        let application = match parse_eligibility_form(&input) {
            Ok(application) => application,
            Err(message) => {
                state.update(|s| s.finish_with_error(message));
                return;
            }
        };
        state.update(EligibilityState::begin_submit);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::check_eligibility(&application).await {
                Ok(result) => state.update(|s| s.finish_with_result(result)),
                Err(message) => state.update(|s| s.finish_with_error(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = application;
        }
    };

    view! {
        <div class="eligibility-page">
            <h1>"Loan Eligibility Check"</h1>

            <form class="eligibility-form" on:submit=on_submit>
                <label class="eligibility-form__field">
                    "Age"
                    <input
                        type="number"
                        min="18"
                        max="80"
                        prop:value=move || age.get()
                        on:input=move |ev| age.set(event_target_value(&ev))
                    />
                </label>
                <label class="eligibility-form__field">
                    "Monthly Income (₹)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || income.get()
                        on:input=move |ev| income.set(event_target_value(&ev))
                    />
                </label>
                <label class="eligibility-form__field">
                    "Employment Status"
                    <select
                        prop:value=move || employment_status.get()
                        on:change=move |ev| employment_status.set(event_target_value(&ev))
                    >
                        <option value="">"Select Status"</option>
                        {EmploymentStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.as_wire_str()>{status.label()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="eligibility-form__field">
                    "Loan Amount (₹)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || loan_amount.get()
                        on:input=move |ev| loan_amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="eligibility-form__field">
                    "Loan Tenure (months)"
                    <input
                        type="number"
                        min="6"
                        max="360"
                        prop:value=move || loan_tenure.get()
                        on:input=move |ev| loan_tenure.set(event_target_value(&ev))
                    />
                </label>
                <label class="eligibility-form__field">
                    "Credit Score"
                    <input
                        type="number"
                        min="300"
                        max="900"
                        prop:value=move || credit_score.get()
                        on:input=move |ev| credit_score.set(event_target_value(&ev))
                    />
                    <span class="eligibility-form__hint">"Leave empty if unknown"</span>
                </label>
                <label class="eligibility-form__field">
                    "Existing Monthly Liabilities (₹)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || existing_liabilities.get()
                        on:input=move |ev| existing_liabilities.set(event_target_value(&ev))
                    />
                    <span class="eligibility-form__hint">"Include EMIs, credit card bills, etc."</span>
                </label>
                <label class="eligibility-form__field">
                    "Loan Type"
                    <select
                        prop:value=move || loan_type.get()
                        on:change=move |ev| loan_type.set(event_target_value(&ev))
                    >
                        <option value="">"Select Loan Type"</option>
                        {LoanType::ALL
                            .into_iter()
                            .map(|lt| view! { <option value=lt.as_wire_str()>{lt.label()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.submitting)>
                    {move || {
                        if state.with(|s| s.submitting) { "Checking Eligibility..." } else { "Check Eligibility" }
                    }}
                </button>
            </form>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="eligibility-page__error">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>

            {move || {
                state
                    .with(|s| s.result.clone())
                    .map(|result| view! { <EligibilityResult result=result/> })
            }}
        </div>
    }
}
