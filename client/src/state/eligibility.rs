//! Submission state for the loan-eligibility page.

#[cfg(test)]
#[path = "eligibility_test.rs"]
mod eligibility_test;

use types::PredictionResult;

/// Eligibility-check state: in-flight flag, last decision, last error.
///
/// Exactly one of `result`/`error` is expected to be set after a submit
/// settles; a new submit clears both before the request goes out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EligibilityState {
    pub submitting: bool,
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
}

impl EligibilityState {
    /// Transition into the submitting state, dropping stale output.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.result = None;
        self.error = None;
    }

    /// Settle the submit with a decision from the server.
    pub fn finish_with_result(&mut self, result: PredictionResult) {
        self.submitting = false;
        self.result = Some(result);
        self.error = None;
    }

    /// Settle the submit with a user-facing error message.
    pub fn finish_with_error(&mut self, message: String) {
        self.submitting = false;
        self.result = None;
        self.error = Some(message);
    }
}
