//! Validation engine - interprets the field schema against current values.
//!
//! Every field is checked independently: its error depends only on its own
//! raw value and the selected topic, never on another field's error. The
//! first failing constraint of a field wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use super::field::FieldName;
use super::question::{AdditionalQuestion, QuestionPolicy};
use super::schema::{applicable_fields, Constraint};
use super::topic::SurveyTopic;
use super::values::{FieldValue, FieldValues};

/// Local part, `@`, then at least two dot-separated DNS labels.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const NOT_A_NUMBER: &str = "Must be a number";
pub const NEGATIVE_NUMBER: &str = "Must be at least 0";

/// Field name to human-readable error. A missing key means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(name, message)| (*name, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validates the base fields that apply to `topic`.
///
/// Fields of inactive topic groups are skipped even when they hold stale
/// values, so they can never block submission.
pub fn validate(values: &FieldValues, topic: Option<SurveyTopic>) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for spec in applicable_fields(topic) {
        if let Err(message) = check_all(spec.label, spec.constraints, values.get(spec.name)) {
            errors.insert(spec.name, message);
        }
    }

    errors
}

/// Validates base fields plus the loaded additional questions.
pub fn validate_form(
    values: &FieldValues,
    topic: Option<SurveyTopic>,
    questions: &[AdditionalQuestion],
    policy: QuestionPolicy,
) -> ErrorMap {
    let mut errors = validate(values, topic);

    if policy == QuestionPolicy::Required {
        for question in questions {
            let field = question.field_name();
            if let Err(message) =
                check_all(&question.label, &[Constraint::Required], values.get(field))
            {
                errors.insert(field, message);
            }
        }
    }

    errors
}

fn check_all(
    label: &str,
    constraints: &[Constraint],
    value: Option<&FieldValue>,
) -> Result<(), String> {
    let empty = FieldValue::empty();
    let value = value.unwrap_or(&empty);
    constraints
        .iter()
        .try_for_each(|constraint| check(label, *constraint, value))
}

/// Applies one constraint. Format constraints pass on empty values; only
/// `Required` rejects emptiness.
fn check(label: &str, constraint: Constraint, value: &FieldValue) -> Result<(), String> {
    if value.is_empty() {
        return match constraint {
            Constraint::Required => Err(format!("{} is required", label)),
            _ => Ok(()),
        };
    }

    match constraint {
        Constraint::Required => Ok(()),
        Constraint::Email => {
            if EMAIL_PATTERN.is_match(&value.as_text()) {
                Ok(())
            } else {
                Err(INVALID_EMAIL.to_string())
            }
        }
        Constraint::NonNegativeNumber => match value.as_number() {
            None => Err(NOT_A_NUMBER.to_string()),
            Some(number) if number < 0.0 => Err(NEGATIVE_NUMBER.to_string()),
            Some(_) => Ok(()),
        },
        Constraint::MinLength(min) => {
            if value.as_text().chars().count() < min {
                Err(format!("{} must be at least {} characters", label, min))
            } else {
                Ok(())
            }
        }
    }
}
