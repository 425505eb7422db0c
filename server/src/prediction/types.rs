//! Prediction-client errors and the mockable predictor trait.

use types::{LoanApplication, PredictionResult};

/// Errors produced by prediction-client operations.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// A configuration value is missing or could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The named API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the prediction service failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The prediction service returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The prediction service response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),
}

/// The eligibility decision boundary, implemented by [`super::PredictionClient`]
/// in production and by mocks in tests.
#[async_trait::async_trait]
pub trait EligibilityPredictor: Send + Sync {
    /// Ask the prediction service for a decision on one application.
    async fn predict(&self, application: &LoanApplication)
    -> Result<PredictionResult, PredictionError>;
}
