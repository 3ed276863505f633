//! Question service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{is_http_url, ValidationError};

/// Where topic questions are fetched from
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionServiceConfig {
    /// Service root; questions live under `{base_url}/questions/{topic}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl QuestionServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate question service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidQuestionServiceUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout("question service"));
        }
        Ok(())
    }
}

impl Default for QuestionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuestionServiceConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = QuestionServiceConfig {
            base_url: "localhost:4000".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidQuestionServiceUrl)
        );
    }

    #[test]
    fn test_rejects_out_of_range_timeout() {
        for timeout_secs in [0, 121] {
            let config = QuestionServiceConfig {
                timeout_secs,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "timeout {}", timeout_secs);
        }
    }
}
