//! Form module - the survey form aggregate and its lifecycle.
//!
//! A SurveyForm owns the user's answers, which fields have been touched, the
//! derived error map and the additional questions loaded for the topic.

mod aggregate;
mod errors;
mod status;
mod submission;

pub use aggregate::{FieldView, QuestionTicket, SurveyForm};
pub use errors::FormError;
pub use status::FormStatus;
pub use submission::Submission;
