//! HTTP Submission Sink - posts completed surveys as JSON.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::form::Submission;
use crate::ports::{SinkError, SubmissionSink};

/// Posts each submission envelope to a fixed endpoint.
pub struct HttpSubmissionSink {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl HttpSubmissionSink {
    /// Creates a sink posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `Network` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SinkError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SinkError::Timeout {
                        timeout_secs: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    SinkError::network(format!("Connection failed: {}", e))
                } else {
                    SinkError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                form_id = %submission.form_id,
                status = status.as_u16(),
                "Submission endpoint rejected survey"
            );
            return Err(SinkError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(form_id = %submission.form_id, endpoint = %self.endpoint, "Survey delivered");
        Ok(())
    }
}
