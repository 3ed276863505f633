//! Question Source Adapters.
//!
//! - `HttpQuestionSource` - Question service over HTTP
//! - `StaticQuestionSource` - Fixed lists with latency and error injection

mod http;
mod static_source;

pub use http::{HttpQuestionSource, HttpQuestionSourceConfig};
pub use static_source::StaticQuestionSource;
