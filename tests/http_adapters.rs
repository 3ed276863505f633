//! Integration tests for the HTTP question source and submission sink.
//!
//! Each test runs against a local mock server:
//! 1. Question lists are fetched from `/questions/{topic}` and parsed
//! 2. Error statuses, bad bodies and slow responses map to distinct errors
//! 3. Submissions are POSTed as JSON

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use survey_form::adapters::{HttpQuestionSource, HttpQuestionSourceConfig, HttpSubmissionSink};
use survey_form::domain::foundation::{FormId, Timestamp};
use survey_form::domain::form::Submission;
use survey_form::domain::survey::{FieldName, FieldValues, InputKind, SurveyTopic};
use survey_form::ports::{QuestionSource, QuestionSourceError, SinkError, SubmissionSink};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn question_source(server: &MockServer) -> HttpQuestionSource {
    HttpQuestionSource::new(HttpQuestionSourceConfig::new(server.uri())).unwrap()
}

fn submission() -> Submission {
    let mut values = FieldValues::initial();
    values.set(FieldName::FullName, "Jane Doe".into());
    Submission {
        form_id: FormId::new(),
        submitted_at: Timestamp::now(),
        values,
    }
}

// =============================================================================
// Question source
// =============================================================================

#[tokio::test]
async fn fetches_questions_for_topic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/Health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "label": "Sleep hours", "type": "number" },
            { "label": "Allergies" },
            { "label": "Mood", "type": "range" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let questions = question_source(&server)
        .fetch_questions(SurveyTopic::Health)
        .await
        .unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].label, "Sleep hours");
    assert_eq!(questions[0].kind, InputKind::Number);
    assert_eq!(questions[1].kind, InputKind::Text, "missing type defaults to text");
    assert_eq!(questions[2].kind, InputKind::Other("range".to_string()));
}

#[tokio::test]
async fn empty_list_is_valid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/Education"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let questions = question_source(&server)
        .fetch_questions(SurveyTopic::Education)
        .await
        .unwrap();

    assert!(questions.is_empty());
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/Technology"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = question_source(&server)
        .fetch_questions(SurveyTopic::Technology)
        .await;

    assert_eq!(result, Err(QuestionSourceError::Status { status: 500 }));
}

#[tokio::test]
async fn non_list_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/Technology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "questions": [] })))
        .mount(&server)
        .await;

    let result = question_source(&server)
        .fetch_questions(SurveyTopic::Technology)
        .await;

    assert!(matches!(result, Err(QuestionSourceError::Malformed(_))));
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/Health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let source = HttpQuestionSource::new(
        HttpQuestionSourceConfig::new(server.uri()).with_timeout(Duration::from_secs(1)),
    )
    .unwrap();

    let result = source.fetch_questions(SurveyTopic::Health).await;

    assert_eq!(result, Err(QuestionSourceError::Timeout { timeout_secs: 1 }));
}

// =============================================================================
// Submission sink
// =============================================================================

#[tokio::test]
async fn posts_submission_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/surveys"))
        .and(body_partial_json(json!({
            "values": { "fullName": "Jane Doe", "feedback": "" }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let sink = HttpSubmissionSink::new(
        format!("{}/surveys", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    sink.deliver(&submission()).await.unwrap();
}

#[tokio::test]
async fn rejected_submission_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/surveys"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let sink = HttpSubmissionSink::new(
        format!("{}/surveys", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    let result = sink.deliver(&submission()).await;

    assert_eq!(result, Err(SinkError::Rejected { status: 503 }));
}
