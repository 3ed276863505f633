//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid question service URL format")]
    InvalidQuestionServiceUrl,

    #[error("Invalid submission endpoint URL format")]
    InvalidSubmissionEndpoint,

    #[error("Invalid {0} timeout")]
    InvalidTimeout(&'static str),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}

/// Whether `url` looks like an absolute HTTP(S) URL.
pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
