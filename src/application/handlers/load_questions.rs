//! LoadQuestionsHandler - fetches the additional questions for a topic change.

use std::sync::Arc;

use crate::domain::form::QuestionTicket;
use crate::domain::survey::QuestionDescriptor;
use crate::ports::{QuestionSource, QuestionSourceError};

/// Command to load questions for an issued ticket.
#[derive(Debug, Clone, Copy)]
pub struct LoadQuestionsCommand {
    pub ticket: QuestionTicket,
}

/// Questions fetched for a ticket, ready for `SurveyForm::apply_questions`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadQuestionsResult {
    pub ticket: QuestionTicket,
    pub questions: Vec<QuestionDescriptor>,
}

/// Handler for loading topic questions.
///
/// Failures are logged and returned; the caller leaves the form's current
/// question list as it is.
#[derive(Clone)]
pub struct LoadQuestionsHandler {
    source: Arc<dyn QuestionSource>,
}

impl LoadQuestionsHandler {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(
        &self,
        cmd: LoadQuestionsCommand,
    ) -> Result<LoadQuestionsResult, QuestionSourceError> {
        let ticket = cmd.ticket;

        match self.source.fetch_questions(ticket.topic).await {
            Ok(questions) => {
                tracing::debug!(
                    topic = %ticket.topic,
                    sequence = ticket.sequence,
                    count = questions.len(),
                    "Questions loaded"
                );
                Ok(LoadQuestionsResult { ticket, questions })
            }
            Err(err) => {
                tracing::error!(
                    topic = %ticket.topic,
                    sequence = ticket.sequence,
                    error = %err,
                    "Error fetching additional questions"
                );
                Err(err)
            }
        }
    }
}
