//! Reactive page state shared via Leptos context.
//!
//! Each form page owns one state struct provided as an `RwSignal` from the
//! app root, so the result panels survive component re-renders without
//! prop-drilling.

pub mod eligibility;
pub mod rates;
