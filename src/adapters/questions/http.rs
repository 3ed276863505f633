//! HTTP Question Source - loads topic questions from the question service.
//!
//! Issues `GET {base_url}/questions/{topic}` and expects a JSON array of
//! `{ "label": ..., "type": ... }` objects in response.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpQuestionSourceConfig::new("http://localhost:4000")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let source = HttpQuestionSource::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::survey::{QuestionDescriptor, SurveyTopic};
use crate::ports::{QuestionSource, QuestionSourceError};

/// Configuration for the HTTP question source.
#[derive(Debug, Clone)]
pub struct HttpQuestionSourceConfig {
    /// Service root, without the `/questions` path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpQuestionSourceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Question source backed by the HTTP question service.
pub struct HttpQuestionSource {
    config: HttpQuestionSourceConfig,
    client: Client,
}

impl HttpQuestionSource {
    /// Creates a new source.
    ///
    /// # Errors
    ///
    /// Returns `Network` if the HTTP client cannot be built.
    pub fn new(config: HttpQuestionSourceConfig) -> Result<Self, QuestionSourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| QuestionSourceError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the endpoint URL for a topic.
    fn questions_url(&self, topic: SurveyTopic) -> String {
        format!(
            "{}/questions/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(topic.as_str())
        )
    }

    fn map_request_error(&self, e: reqwest::Error) -> QuestionSourceError {
        if e.is_timeout() {
            QuestionSourceError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            QuestionSourceError::network(format!("Connection failed: {}", e))
        } else {
            QuestionSourceError::network(e.to_string())
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(
        &self,
        topic: SurveyTopic,
    ) -> Result<Vec<QuestionDescriptor>, QuestionSourceError> {
        let url = self.questions_url(topic);
        tracing::debug!(%topic, %url, "Fetching additional questions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%topic, status = status.as_u16(), "Question service returned an error");
            return Err(QuestionSourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let questions: Vec<QuestionDescriptor> = serde_json::from_str(&body)
            .map_err(|e| QuestionSourceError::malformed(e.to_string()))?;

        tracing::debug!(%topic, count = questions.len(), "Loaded additional questions");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_ten_second_timeout() {
        let config = HttpQuestionSourceConfig::new("http://localhost:4000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn url_appends_topic_to_base() {
        let source =
            HttpQuestionSource::new(HttpQuestionSourceConfig::new("http://localhost:4000/"))
                .unwrap();
        assert_eq!(
            source.questions_url(SurveyTopic::Health),
            "http://localhost:4000/questions/Health"
        );
    }
}
