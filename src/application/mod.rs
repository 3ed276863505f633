//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod session;

pub use handlers::{
    LoadQuestionsCommand, LoadQuestionsHandler, LoadQuestionsResult, SubmitError,
    SubmitSurveyHandler,
};
pub use session::SurveySession;
