//! Console Submission Sink - prints the submitted values as pretty JSON.

use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::form::Submission;
use crate::ports::{SinkError, SubmissionSink};

/// Writes `Submission::to_pretty_json` followed by a newline.
#[derive(Clone)]
pub struct ConsoleSubmissionSink {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Default for ConsoleSubmissionSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSubmissionSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }
}

#[async_trait]
impl SubmissionSink for ConsoleSubmissionSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        let json = submission.to_pretty_json()?;

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{}", json)
            .and_then(|_| out.flush())
            .map_err(|e| SinkError::network(format!("Failed to write submission: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{FormId, Timestamp};
    use crate::domain::survey::{FieldName, FieldValues};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn writes_pretty_values() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleSubmissionSink::with_writer(buffer.clone());

        let mut values = FieldValues::default();
        values.set(FieldName::FullName, "Jane Doe".into());
        let submission = Submission {
            form_id: FormId::new(),
            submitted_at: Timestamp::now(),
            values,
        };

        sink.deliver(&submission).await.unwrap();

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "{\n  \"fullName\": \"Jane Doe\"\n}\n");
    }
}
