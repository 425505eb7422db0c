//! Simulated-quote results table for the interest-rate page.

#[cfg(test)]
#[path = "rate_table_test.rs"]
mod rate_table_test;

use leptos::prelude::*;

use crate::net::types::RateQuote;
use crate::util::money::{format_dollars, format_percent};

/// Whether a row index gets the best-rate highlight. Quotes arrive sorted
/// ascending, so the first row always wins.
fn is_best_rate(index: usize) -> bool {
    index == 0
}

/// Quote table with a "Best Rate" badge on the leading row.
#[component]
pub fn RateTable(quotes: Vec<RateQuote>) -> impl IntoView {
    view! {
        <div class="rate-results">
            <h3 class="rate-results__title">"Best Available Rates"</h3>
            <table class="rate-results__table">
                <thead>
                    <tr>
                        <th>"Bank"</th>
                        <th>"Interest Rate"</th>
                        <th>"Monthly Payment"</th>
                        <th>"Total Payment"</th>
                    </tr>
                </thead>
                <tbody>
                    {quotes
                        .into_iter()
                        .enumerate()
                        .map(|(index, quote)| {
                            let best = is_best_rate(index);
                            view! {
                                <tr class=("rate-results__row--best", move || best)>
                                    <td>
                                        {quote.bank_name.clone()}
                                        <Show when=move || best>
                                            <span class="rate-results__badge">"Best Rate"</span>
                                        </Show>
                                    </td>
                                    <td>{format_percent(quote.interest_rate)}</td>
                                    <td>{format_dollars(quote.monthly_payment)}</td>
                                    <td>{format_dollars(quote.total_payment)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
