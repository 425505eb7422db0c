//! HTTP client for the external prediction service.
//!
//! Thin reqwest wrapper for `POST {base}/predict`. Pure parsing in
//! `parse_response` for testability.

use std::time::Duration;

use types::{LoanApplication, PredictionResult};

use super::config::PredictionConfig;
use super::types::{EligibilityPredictor, PredictionError};

pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl PredictionClient {
    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is incomplete or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, PredictionError> {
        Self::from_config(PredictionConfig::from_env()?)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: PredictionConfig) -> Result<Self, PredictionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| PredictionError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, api_key: config.api_key })
    }

    /// The configured service base URL (for startup logging).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn predict_inner(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionResult, PredictionError> {
        let url = format!("{}/predict", self.base_url);
        let mut request = self.http.post(&url).json(application);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PredictionError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| PredictionError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(PredictionError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl EligibilityPredictor for PredictionClient {
    async fn predict(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionResult, PredictionError> {
        self.predict_inner(application).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<PredictionResult, PredictionError> {
    serde_json::from_str(json).map_err(|e| PredictionError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
