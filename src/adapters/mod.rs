//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `questions` - Question sources (HTTP service, static lists)
//! - `submission` - Submission sinks (HTTP endpoint, console, in-memory)

pub mod questions;
pub mod submission;

pub use questions::{HttpQuestionSource, HttpQuestionSourceConfig, StaticQuestionSource};
pub use submission::{ConsoleSubmissionSink, HttpSubmissionSink, InMemorySubmissionSink};
