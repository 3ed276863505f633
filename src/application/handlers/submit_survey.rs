//! SubmitSurveyHandler - validates a form and delivers its submission.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::form::{FormError, Submission, SurveyForm};
use crate::domain::survey::ErrorMap;
use crate::ports::{SinkError, SubmissionSink};

/// Errors from submitting a survey.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Field errors block submission; the form stays editable.
    #[error("survey has {} invalid field(s)", .0.len())]
    Invalid(ErrorMap),

    #[error(transparent)]
    Form(FormError),

    /// The form validated and is submitted, but the sink failed.
    #[error("failed to deliver submission: {source}")]
    Delivery {
        submission: Submission,
        source: SinkError,
    },
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&ErrorMap> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitError::Invalid(_) => ErrorCode::ValidationFailed,
            SubmitError::Form(err) => err.code(),
            SubmitError::Delivery { source, .. } => source.code(),
        }
    }
}

impl From<FormError> for SubmitError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::ValidationFailed(errors) => SubmitError::Invalid(errors),
            other => SubmitError::Form(other),
        }
    }
}

impl From<SubmitError> for DomainError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => FormError::ValidationFailed(errors).into(),
            SubmitError::Form(err) => err.into(),
            SubmitError::Delivery { source, .. } => source.into(),
        }
    }
}

/// Handler for survey submission.
#[derive(Clone)]
pub struct SubmitSurveyHandler {
    sink: Arc<dyn SubmissionSink>,
}

impl SubmitSurveyHandler {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(&self, form: &mut SurveyForm) -> Result<Submission, SubmitError> {
        // 1. Validate and move to Submitted
        let submission = match form.submit() {
            Ok(submission) => submission,
            Err(err) => {
                if let Some(errors) = err.field_errors() {
                    tracing::debug!(form_id = %form.id(), invalid = errors.len(), "Submission blocked");
                }
                return Err(err.into());
            }
        };

        // 2. Deliver
        if let Err(source) = self.sink.deliver(&submission).await {
            tracing::error!(form_id = %submission.form_id, error = %source, "Submission delivery failed");
            return Err(SubmitError::Delivery { submission, source });
        }

        tracing::info!(
            form_id = %submission.form_id,
            topic = ?submission.topic(),
            fields = submission.values.len(),
            "Survey submitted"
        );
        Ok(submission)
    }
}
