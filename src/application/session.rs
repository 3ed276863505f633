//! SurveySession - drives one survey form against its collaborators.
//!
//! The session owns a [`SurveyForm`] and turns the tickets it issues into
//! background fetches tracked in a task set. Finished fetches are applied
//! to the form on the next call that touches it, or all at once through
//! [`SurveySession::settle`]. The form rejects results for superseded
//! tickets, so the question list always reflects the latest topic fetched.
//!
//! Must be used from within a tokio runtime.

use std::sync::Arc;

use tokio::task::{JoinError, JoinSet};

use crate::domain::form::{FieldView, FormError, QuestionTicket, Submission, SurveyForm};
use crate::domain::survey::{FieldValue, QuestionPolicy};
use crate::ports::{QuestionSource, QuestionSourceError, SubmissionSink};

use super::handlers::{
    LoadQuestionsCommand, LoadQuestionsHandler, LoadQuestionsResult, SubmitError,
    SubmitSurveyHandler,
};

type FetchOutcome = (QuestionTicket, Result<LoadQuestionsResult, QuestionSourceError>);

/// A mounted survey with question loading and submission wired in.
pub struct SurveySession {
    form: SurveyForm,
    loader: LoadQuestionsHandler,
    submitter: SubmitSurveyHandler,
    fetches: JoinSet<FetchOutcome>,
}

impl SurveySession {
    pub fn new(source: Arc<dyn QuestionSource>, sink: Arc<dyn SubmissionSink>) -> Self {
        Self::with_form(SurveyForm::new(), source, sink)
    }

    pub fn with_policy(
        policy: QuestionPolicy,
        source: Arc<dyn QuestionSource>,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        Self::with_form(SurveyForm::with_policy(policy), source, sink)
    }

    fn with_form(
        form: SurveyForm,
        source: Arc<dyn QuestionSource>,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        tracing::debug!(form_id = %form.id(), "Survey form mounted");
        Self {
            form,
            loader: LoadQuestionsHandler::new(source),
            submitter: SubmitSurveyHandler::new(sink),
            fetches: JoinSet::new(),
        }
    }

    pub fn form(&self) -> &SurveyForm {
        &self.form
    }

    /// Number of fetches not yet applied.
    pub fn pending_fetches(&self) -> usize {
        self.fetches.len()
    }

    /// Sets a value; a topic change starts a background question fetch.
    pub fn set_value(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.drain_ready();
        if let Some(ticket) = self.form.set_value(field, value)? {
            self.spawn_fetch(ticket);
        }
        Ok(())
    }

    pub fn set_touched(&mut self, field: &str) -> Result<(), FormError> {
        self.drain_ready();
        self.form.set_touched(field)
    }

    pub fn field_views(&mut self) -> Vec<FieldView> {
        self.drain_ready();
        self.form.field_views()
    }

    /// Applies every fetch that has already finished. Returns how many
    /// replaced the question list.
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Some(joined) = self.fetches.try_join_next() {
            if self.apply(joined) {
                applied += 1;
            }
        }
        applied
    }

    /// Waits for all outstanding fetches and applies them.
    ///
    /// A fetch task that panics counts as a failed fetch.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.fetches.join_next().await {
            self.apply(joined);
        }
    }

    /// Submits the form and delivers it to the sink.
    ///
    /// Fetches still in flight are not awaited; call [`settle`](Self::settle)
    /// first to include their questions.
    pub async fn submit(&mut self) -> Result<Submission, SubmitError> {
        self.drain_ready();
        self.submitter.handle(&mut self.form).await
    }

    fn spawn_fetch(&mut self, ticket: QuestionTicket) {
        let loader = self.loader.clone();

        self.fetches.spawn(async move {
            let result = loader.handle(LoadQuestionsCommand { ticket }).await;
            (ticket, result)
        });
    }

    fn apply(&mut self, joined: Result<FetchOutcome, JoinError>) -> bool {
        let (ticket, result) = match joined {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "Question fetch task failed");
                return false;
            }
        };

        let loaded = match result {
            Ok(loaded) => loaded,
            Err(_) => return false,
        };

        let applied = self.form.apply_questions(&ticket, loaded.questions);
        if !applied {
            tracing::debug!(
                topic = %ticket.topic,
                sequence = ticket.sequence,
                "Discarding questions for superseded topic"
            );
        }
        applied
    }
}
