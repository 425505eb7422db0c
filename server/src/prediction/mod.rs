//! Prediction-service integration.
//!
//! The loan-eligibility ML model lives in an external HTTP service; this
//! module owns the typed config, the reqwest client that calls it, and the
//! `EligibilityPredictor` trait that lets the service layer run against
//! mocks in tests.

pub mod client;
pub mod config;
pub mod types;

pub use client::PredictionClient;
pub use types::{EligibilityPredictor, PredictionError};
