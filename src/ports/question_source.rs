//! Question Source Port - Interface for fetching topic-specific questions.
//!
//! The form asks for extra questions whenever the survey topic changes. A
//! source answers with an ordered list of `{ label, type }` descriptors.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct NoQuestions;
//!
//! #[async_trait]
//! impl QuestionSource for NoQuestions {
//!     async fn fetch_questions(
//!         &self,
//!         _topic: SurveyTopic,
//!     ) -> Result<Vec<QuestionDescriptor>, QuestionSourceError> {
//!         Ok(Vec::new())
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::{QuestionDescriptor, SurveyTopic};

/// Port for loading additional questions for a topic.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetches the questions for `topic`, in display order.
    async fn fetch_questions(
        &self,
        topic: SurveyTopic,
    ) -> Result<Vec<QuestionDescriptor>, QuestionSourceError>;
}

/// Errors from a question source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionSourceError {
    /// Connection failed or the transport broke.
    #[error("network error: {0}")]
    Network(String),

    /// No response within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Service answered with a non-success status.
    #[error("question service returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Body was not a list of question descriptors.
    #[error("malformed question list: {0}")]
    Malformed(String),
}

impl QuestionSourceError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed-body error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::QuestionServiceUnavailable
    }
}

impl From<QuestionSourceError> for DomainError {
    fn from(err: QuestionSourceError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
