//! Submission state for the interest-rate comparison page.

#[cfg(test)]
#[path = "rates_test.rs"]
mod rates_test;

use types::RateQuote;

/// Rate-comparison state: calculating flag, last simulated quotes, last
/// validation message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatesState {
    pub calculating: bool,
    pub quotes: Option<Vec<RateQuote>>,
    pub error: Option<String>,
}

impl RatesState {
    /// Transition into the calculating state, dropping stale output.
    pub fn begin_calculation(&mut self) {
        self.calculating = true;
        self.quotes = None;
        self.error = None;
    }

    /// Settle with freshly simulated quotes.
    pub fn finish_with_quotes(&mut self, quotes: Vec<RateQuote>) {
        self.calculating = false;
        self.quotes = Some(quotes);
        self.error = None;
    }

    /// Reject the form with a validation message before any simulation runs.
    pub fn reject(&mut self, message: String) {
        self.calculating = false;
        self.error = Some(message);
    }
}
