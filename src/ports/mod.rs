//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionSource` - Loads the additional questions for a survey topic
//! - `SubmissionSink` - Delivers a validated submission

mod question_source;
mod submission_sink;

pub use question_source::{QuestionSource, QuestionSourceError};
pub use submission_sink::{SinkError, SubmissionSink};
