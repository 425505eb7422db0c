//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the eligibility call is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with user-facing messages so the page can
//! drop the string straight into the error banner without translation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoanApplication, PredictionResult};

#[cfg(any(test, feature = "hydrate"))]
const ELIGIBILITY_ENDPOINT: &str = "/api/eligibility/check";

#[cfg(any(test, feature = "hydrate"))]
const CONNECTION_FAILED_MESSAGE: &str =
    "Failed to connect to the server. Please check if the backend is running.";

/// User-facing message for a non-OK eligibility response.
#[cfg(any(test, feature = "hydrate"))]
fn eligibility_failed_message(status: u16) -> String {
    match status {
        422 => "The server rejected the submitted details. Please review the form and try again."
            .to_owned(),
        429 => "Too many eligibility checks right now. Please wait a minute and try again."
            .to_owned(),
        503 => "The prediction service is currently unavailable. Please try again later.".to_owned(),
        other => format!("Eligibility check failed: server returned status {other}."),
    }
}

/// POST the application to `/api/eligibility/check` and return the decision.
///
/// # Errors
///
/// Returns a user-facing message when the request cannot be sent, the server
/// responds with a non-OK status, or the response body does not parse.
pub async fn check_eligibility(application: &LoanApplication) -> Result<PredictionResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ELIGIBILITY_ENDPOINT)
            .json(application)
            .map_err(|_| CONNECTION_FAILED_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| CONNECTION_FAILED_MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(eligibility_failed_message(resp.status()));
        }
        resp.json::<PredictionResult>()
            .await
            .map_err(|_| "The server returned an unreadable response.".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = application;
        Err("not available on server".to_owned())
    }
}
