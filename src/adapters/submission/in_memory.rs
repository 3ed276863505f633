//! In-memory Submission Sink - collects submissions for inspection.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::form::Submission;
use crate::ports::{SinkError, SubmissionSink};

/// Stores every delivered submission. Can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionSink {
    delivered: Arc<Mutex<Vec<Submission>>>,
    failure: Option<SinkError>,
}

impl InMemorySubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every delivery fail with `error`.
    pub fn failing(error: SinkError) -> Self {
        Self {
            delivered: Arc::default(),
            failure: Some(error),
        }
    }

    pub fn delivered(&self) -> Vec<Submission> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl SubmissionSink for InMemorySubmissionSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());
        Ok(())
    }
}
