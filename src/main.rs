//! Command-line survey runner.
//!
//! Reads answers as a JSON object on stdin, fills a survey form with them
//! and submits it. The topic is applied first and its questions are loaded
//! before the remaining answers, so `additionalQuestion{i}` keys resolve.
//!
//! Exits with status 1 and prints the error map when the answers are invalid.

use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::Arc;

use serde_json::{Map, Value};

use survey_form::adapters::{
    ConsoleSubmissionSink, HttpQuestionSource, HttpQuestionSourceConfig, HttpSubmissionSink,
};
use survey_form::application::{SubmitError, SurveySession};
use survey_form::config::{AppConfig, LoggingConfig};
use survey_form::domain::form::FormError;
use survey_form::domain::survey::FieldValue;
use survey_form::ports::SubmissionSink;

const TOPIC_FIELD: &str = "surveyTopic";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "Survey run failed");
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

async fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(err) => {
            // No configured level yet; log the failure at the default one.
            LoggingConfig::default().init();
            return Err(err.into());
        }
    };
    config.logging.init();

    let source = HttpQuestionSource::new(
        HttpQuestionSourceConfig::new(&config.questions.base_url)
            .with_timeout(config.questions.timeout()),
    )?;
    let sink: Arc<dyn SubmissionSink> = match config.submission.endpoint() {
        Some(endpoint) => Arc::new(HttpSubmissionSink::new(
            endpoint,
            config.submission.timeout(),
        )?),
        None => Arc::new(ConsoleSubmissionSink::stdout()),
    };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let answers: Map<String, Value> = serde_json::from_str(&input)?;

    let mut session =
        SurveySession::with_policy(config.form.question_policy(), Arc::new(source), sink);

    if let Some(topic) = answers.get(TOPIC_FIELD) {
        session.set_value(TOPIC_FIELD, field_value(topic))?;
        session.settle().await;
    }

    for (field, value) in answers.iter().filter(|(field, _)| *field != TOPIC_FIELD) {
        match session.set_value(field, field_value(value)) {
            Ok(()) => {}
            Err(FormError::UnknownField(name)) => {
                tracing::warn!(field = %name, "Ignoring answer for unknown field");
            }
            Err(err) => return Err(err.into()),
        }
    }

    match session.submit().await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(SubmitError::Invalid(errors)) => {
            println!("{}", serde_json::to_string_pretty(&errors)?);
            Ok(ExitCode::from(1))
        }
        Err(err) => Err(err.into()),
    }
}

fn field_value(value: &Value) -> FieldValue {
    match value {
        Value::String(text) => FieldValue::Text(text.clone()),
        Value::Number(number) => number
            .as_f64()
            .map(FieldValue::Number)
            .unwrap_or_else(|| FieldValue::Text(number.to_string())),
        Value::Null => FieldValue::empty(),
        other => FieldValue::Text(other.to_string()),
    }
}
