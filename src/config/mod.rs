//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SURVEY_FORM` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use survey_form::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Questions from {}", config.questions.base_url);
//! ```

mod error;
mod form;
mod logging;
mod questions;
mod submission;

pub use error::{ConfigError, ValidationError};
pub use form::FormConfig;
pub use logging::LoggingConfig;
pub use questions::QuestionServiceConfig;
pub use submission::SubmissionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration pointed at a local question service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Question service (base URL, timeout)
    #[serde(default)]
    pub questions: QuestionServiceConfig,

    /// Submission delivery (endpoint, timeout)
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Form behaviour
    #[serde(default)]
    pub form: FormConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SURVEY_FORM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SURVEY_FORM__QUESTIONS__BASE_URL=...` -> `questions.base_url = ...`
    /// - `SURVEY_FORM__FORM__REQUIRE_ADDITIONAL_QUESTIONS=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SURVEY_FORM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` or `ConfigError::ValidationFailed`.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for malformed URLs, out-of-range timeouts
    /// or an unparseable log level.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.questions.validate()?;
        self.submission.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::QuestionPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "SURVEY_FORM__QUESTIONS__BASE_URL",
        "SURVEY_FORM__QUESTIONS__TIMEOUT_SECS",
        "SURVEY_FORM__SUBMISSION__ENDPOINT",
        "SURVEY_FORM__FORM__REQUIRE_ADDITIONAL_QUESTIONS",
        "SURVEY_FORM__LOGGING__LEVEL",
        "SURVEY_FORM__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.questions.base_url, "http://localhost:4000");
        assert_eq!(config.questions.timeout_secs, 10);
        assert_eq!(config.submission.endpoint(), None);
        assert_eq!(config.form.question_policy(), QuestionPolicy::Optional);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEY_FORM__QUESTIONS__BASE_URL", "https://questions.example.com");
        env::set_var("SURVEY_FORM__QUESTIONS__TIMEOUT_SECS", "5");
        env::set_var("SURVEY_FORM__SUBMISSION__ENDPOINT", "https://example.com/surveys");
        env::set_var("SURVEY_FORM__FORM__REQUIRE_ADDITIONAL_QUESTIONS", "true");
        env::set_var("SURVEY_FORM__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.questions.base_url, "https://questions.example.com");
        assert_eq!(config.questions.timeout_secs, 5);
        assert_eq!(
            config.submission.endpoint(),
            Some("https://example.com/surveys")
        );
        assert_eq!(config.form.question_policy(), QuestionPolicy::Required);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_question_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEY_FORM__QUESTIONS__BASE_URL", "questions.local");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidQuestionServiceUrl)
        );
    }

    #[test]
    fn test_load_validated_reports_validation_failure() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEY_FORM__SUBMISSION__ENDPOINT", "example.com/surveys");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(
                ValidationError::InvalidSubmissionEndpoint
            ))
        ));
    }
}
