//! Submission Sink Adapters.
//!
//! - `HttpSubmissionSink` - POSTs the submission envelope as JSON
//! - `ConsoleSubmissionSink` - Prints the values as pretty JSON
//! - `InMemorySubmissionSink` - Collects submissions, optionally failing

mod console;
mod http;
mod in_memory;

pub use console::ConsoleSubmissionSink;
pub use http::HttpSubmissionSink;
pub use in_memory::InMemorySubmissionSink;
