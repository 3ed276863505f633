//! Static Question Source - in-process question lists.
//!
//! Serves fixed question lists per topic. Supports simulated latency and
//! error injection so callers can exercise slow or failing services.
//!
//! # Example
//!
//! ```ignore
//! let source = StaticQuestionSource::new()
//!     .with_questions(SurveyTopic::Health, vec![
//!         QuestionDescriptor::new("Sleep hours", InputKind::Number),
//!     ])
//!     .with_delay(SurveyTopic::Technology, Duration::from_millis(200));
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::survey::{QuestionDescriptor, SurveyTopic};
use crate::ports::{QuestionSource, QuestionSourceError};

/// Question source with pre-configured answers.
///
/// Topics without configured questions answer with an empty list.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionSource {
    questions: HashMap<SurveyTopic, Vec<QuestionDescriptor>>,
    failures: HashMap<SurveyTopic, QuestionSourceError>,
    delays: HashMap<SurveyTopic, Duration>,
    /// Topics requested so far, in call order.
    calls: Arc<Mutex<Vec<SurveyTopic>>>,
}

impl StaticQuestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the list returned for `topic`.
    pub fn with_questions(mut self, topic: SurveyTopic, questions: Vec<QuestionDescriptor>) -> Self {
        self.questions.insert(topic, questions);
        self
    }

    /// Makes every fetch for `topic` fail with `error`.
    pub fn with_failure(mut self, topic: SurveyTopic, error: QuestionSourceError) -> Self {
        self.failures.insert(topic, error);
        self
    }

    /// Delays every fetch for `topic`.
    pub fn with_delay(mut self, topic: SurveyTopic, delay: Duration) -> Self {
        self.delays.insert(topic, delay);
        self
    }

    /// Returns the number of fetches made.
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns the requested topics in call order.
    pub fn calls(&self) -> Vec<SurveyTopic> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch_questions(
        &self,
        topic: SurveyTopic,
    ) -> Result<Vec<QuestionDescriptor>, QuestionSourceError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(topic);

        if let Some(delay) = self.delays.get(&topic) {
            sleep(*delay).await;
        }

        if let Some(error) = self.failures.get(&topic) {
            return Err(error.clone());
        }

        Ok(self.questions.get(&topic).cloned().unwrap_or_default())
    }
}
