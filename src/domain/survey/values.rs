//! Field values and the touched set.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::field::FieldName;
use super::topic::SurveyTopic;

/// Raw value of one field.
///
/// Serializes untagged, so a submission carries JSON strings and numbers
/// exactly as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The value of a freshly allocated field.
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// True for empty text. Numbers are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }

    /// Returns the value as the text a widget would display.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text.as_str()),
            FieldValue::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    /// Interprets the value as a finite number.
    ///
    /// Leading and trailing whitespace is ignored; interior whitespace
    /// makes the text non-numeric. Empty text is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number).filter(|n| n.is_finite()),
            FieldValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(number: f64) -> Self {
        FieldValue::Number(number)
    }
}

impl From<i64> for FieldValue {
    fn from(number: i64) -> Self {
        FieldValue::Number(number as f64)
    }
}

/// Current values of every allocated field, keyed by field name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<FieldName, FieldValue>);

impl FieldValues {
    /// Values at mount: every base field present and empty.
    pub fn initial() -> Self {
        Self(
            FieldName::BASE
                .iter()
                .map(|name| (*name, FieldValue::empty()))
                .collect(),
        )
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.0.get(&field)
    }

    /// Returns the field's text, or an empty string when unallocated.
    pub fn text(&self, field: FieldName) -> Cow<'_, str> {
        self.get(field)
            .map(FieldValue::as_text)
            .unwrap_or(Cow::Borrowed(""))
    }

    pub fn set(&mut self, field: FieldName, value: FieldValue) {
        self.0.insert(field, value);
    }

    pub fn remove(&mut self, field: FieldName) -> Option<FieldValue> {
        self.0.remove(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Topic currently selected in the `surveyTopic` field.
    pub fn topic(&self) -> Option<SurveyTopic> {
        SurveyTopic::from_raw(&self.text(FieldName::SurveyTopic))
    }

    /// Drops every `additionalQuestion{i}` slot.
    pub fn clear_additional(&mut self) {
        self.0.retain(|name, _| !name.is_additional());
    }
}

/// Fields the user has interacted with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TouchedSet(BTreeSet<FieldName>);

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: FieldName) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self, fields: impl IntoIterator<Item = FieldName>) {
        self.0.extend(fields);
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains(&field)
    }

    pub fn clear_additional(&mut self) {
        self.0.retain(|name| !name.is_additional());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
