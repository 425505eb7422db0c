//! Prediction-service configuration parsed from environment variables.

use super::types::PredictionError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionConfig {
    /// Service base URL, without a trailing slash.
    pub base_url: String,
    /// API key sent as `x-api-key`, when the service requires one.
    pub api_key: Option<String>,
    pub timeouts: PredictionTimeouts,
}

impl PredictionConfig {
    /// Build typed prediction config from environment variables.
    ///
    /// Required:
    /// - `PREDICTION_API_URL`: service base URL
    ///
    /// Optional:
    /// - `PREDICTION_API_KEY_ENV`: names the env var containing the key
    /// - `PREDICTION_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PREDICTION_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::Config`] when the base URL is unset and
    /// [`PredictionError::MissingApiKey`] when a named key var is empty.
    pub fn from_env() -> Result<Self, PredictionError> {
        let base_url = std::env::var("PREDICTION_API_URL")
            .map_err(|_| PredictionError::Config("PREDICTION_API_URL not set".into()))?
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(PredictionError::Config("PREDICTION_API_URL is empty".into()));
        }

        let api_key = match std::env::var("PREDICTION_API_KEY_ENV") {
            Ok(key_var) => Some(
                std::env::var(&key_var).map_err(|_| PredictionError::MissingApiKey { var: key_var })?,
            ),
            Err(_) => None,
        };

        let timeouts = PredictionTimeouts {
            request_secs: env_parse_u64("PREDICTION_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PREDICTION_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, api_key, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
