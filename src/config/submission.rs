//! Submission delivery configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{is_http_url, ValidationError};

/// Where completed surveys go
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// HTTP endpoint to POST submissions to; printed to stdout when unset
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SubmissionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured endpoint, ignoring blank values
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Validate submission configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = self.endpoint() {
            if !is_http_url(endpoint) {
                return Err(ValidationError::InvalidSubmissionEndpoint);
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("submission"));
        }
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_console() {
        let config = SubmissionConfig::default();
        assert_eq!(config.endpoint(), None);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_endpoint_is_unset() {
        let config = SubmissionConfig {
            endpoint: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let config = SubmissionConfig {
            endpoint: Some("ftp://example.com/surveys".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidSubmissionEndpoint)
        );
    }
}
