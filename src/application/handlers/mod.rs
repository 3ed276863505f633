//! Command handlers.

mod load_questions;
mod submit_survey;

pub use load_questions::{LoadQuestionsCommand, LoadQuestionsHandler, LoadQuestionsResult};
pub use submit_survey::{SubmitError, SubmitSurveyHandler};
