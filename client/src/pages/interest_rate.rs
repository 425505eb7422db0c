//! Interest-rate comparison page.
//!
//! Submit parses and validates the three fields, shows a short simulated
//! "calculating" phase, then renders quotes from the client-side simulation.
//! Nothing on this page talks to the server.

#[cfg(test)]
#[path = "interest_rate_test.rs"]
mod interest_rate_test;

use leptos::prelude::*;

use crate::components::rate_table::RateTable;
use crate::net::types::RateRequest;
use crate::state::rates::RatesState;
use crate::util::quote::simulate_quotes;
use types::validate::validate_rate_request;

/// Simulated processing delay before quotes appear.
#[cfg(feature = "hydrate")]
const CALCULATION_DELAY_MS: u32 = 1_000;

/// Parse the raw form fields into a validated [`RateRequest`].
///
/// The first problem wins and becomes the inline form message.
fn parse_rate_form(loan_amount: &str, loan_tenure: &str, credit_score: &str) -> Result<RateRequest, String> {
    let loan_amount: f64 = loan_amount
        .trim()
        .parse()
        .map_err(|_| "Enter a valid loan amount.".to_owned())?;
    let loan_tenure_months: u32 = loan_tenure
        .trim()
        .parse()
        .map_err(|_| "Enter the loan tenure in months.".to_owned())?;
    let credit_score: u32 = credit_score
        .trim()
        .parse()
        .map_err(|_| "Enter your credit score.".to_owned())?;

    let request = RateRequest { loan_amount, loan_tenure_months, credit_score };
    validate_rate_request(&request).map_err(|e| e.to_string())?;
    Ok(request)
}

#[component]
pub fn InterestRatePage() -> impl IntoView {
    let rates = expect_context::<RwSignal<RatesState>>();

    let loan_amount = RwSignal::new(String::new());
    let loan_tenure = RwSignal::new(String::new());
    let credit_score = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if rates.with(|s| s.calculating) {
            return;
        }
        let request = match parse_rate_form(&loan_amount.get(), &loan_tenure.get(), &credit_score.get()) {
            Ok(request) => request,
            Err(message) => {
                rates.update(|s| s.reject(message));
                return;
            }
        };
        rates.update(RatesState::begin_calculation);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(CALCULATION_DELAY_MS).await;
            let quotes = simulate_quotes(&request);
            rates.update(|s| s.finish_with_quotes(quotes));
        });
        #[cfg(not(feature = "hydrate"))]
        rates.update(|s| s.finish_with_quotes(simulate_quotes(&request)));
    };

    view! {
        <div class="rate-page">
            <h1>"Interest Rate Calculator"</h1>

            <form class="rate-form" on:submit=on_submit>
                <label class="rate-form__field">
                    "Loan Amount"
                    <input
                        type="number"
                        min="1000"
                        prop:value=move || loan_amount.get()
                        on:input=move |ev| loan_amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="rate-form__field">
                    "Loan Tenure (months)"
                    <input
                        type="number"
                        min="12"
                        max="360"
                        prop:value=move || loan_tenure.get()
                        on:input=move |ev| loan_tenure.set(event_target_value(&ev))
                    />
                </label>
                <label class="rate-form__field">
                    "Credit Score"
                    <input
                        type="number"
                        min="300"
                        max="900"
                        prop:value=move || credit_score.get()
                        on:input=move |ev| credit_score.set(event_target_value(&ev))
                    />
                </label>

                <p class="rate-form__info">
                    "We compare interest rates from multiple banks to find you the best deal."
                </p>

                <button class="btn btn--primary" type="submit" disabled=move || rates.with(|s| s.calculating)>
                    {move || if rates.with(|s| s.calculating) { "Calculating..." } else { "Calculate Rates" }}
                </button>
            </form>

            <Show when=move || rates.with(|s| s.error.is_some())>
                <p class="rate-form__error">
                    {move || rates.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            {move || {
                rates
                    .with(|s| s.quotes.clone())
                    .map(|quotes| view! { <RateTable quotes=quotes/> })
            }}
        </div>
    }
}
