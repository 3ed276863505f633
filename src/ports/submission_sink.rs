//! Submission Sink Port - Interface for delivering completed surveys.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::form::Submission;

/// Port for handing a validated submission to its destination.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError>;
}

/// Errors from a submission sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("network error: {0}")]
    Network(String),

    #[error("delivery timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Endpoint rejected the submission.
    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16 },

    #[error("failed to encode submission: {0}")]
    Encoding(String),
}

impl SinkError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SinkError::Encoding(_) => ErrorCode::InternalError,
            _ => ErrorCode::DeliveryFailed,
        }
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        SinkError::Encoding(err.to_string())
    }
}

impl From<SinkError> for DomainError {
    fn from(err: SinkError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_maps_to_delivery_failed() {
        let err = SinkError::Rejected { status: 503 };
        assert_eq!(err.code(), ErrorCode::DeliveryFailed);
        assert_eq!(
            err.to_string(),
            "endpoint rejected submission with status 503"
        );
    }

    #[test]
    fn encoding_is_internal() {
        assert_eq!(
            SinkError::Encoding("bad".to_string()).code(),
            ErrorCode::InternalError
        );
    }
}
