//! Form behaviour configuration

use serde::Deserialize;

use crate::domain::survey::QuestionPolicy;

/// Form options
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormConfig {
    /// Require an answer to every loaded additional question
    #[serde(default)]
    pub require_additional_questions: bool,
}

impl FormConfig {
    pub fn question_policy(&self) -> QuestionPolicy {
        if self.require_additional_questions {
            QuestionPolicy::Required
        } else {
            QuestionPolicy::Optional
        }
    }
}
