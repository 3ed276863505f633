//! Field names and input kinds.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const ADDITIONAL_QUESTION_PREFIX: &str = "additionalQuestion";

/// Name of a form field.
///
/// Base fields are known at compile time; additional questions are keyed by
/// their position in the most recently loaded question list and render as
/// `additionalQuestion{index}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FullName,
    Email,
    SurveyTopic,
    FavoriteProgrammingLanguage,
    YearsOfExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
    Feedback,
    AdditionalQuestion(usize),
}

impl FieldName {
    /// Base fields in display order.
    pub const BASE: [FieldName; 10] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::SurveyTopic,
        FieldName::FavoriteProgrammingLanguage,
        FieldName::YearsOfExperience,
        FieldName::ExerciseFrequency,
        FieldName::DietPreference,
        FieldName::HighestQualification,
        FieldName::FieldOfStudy,
        FieldName::Feedback,
    ];

    /// Returns the wire key of the field.
    pub fn key(&self) -> String {
        match self {
            FieldName::AdditionalQuestion(index) => {
                format!("{}{}", ADDITIONAL_QUESTION_PREFIX, index)
            }
            base => base.base_key().unwrap_or_default().to_string(),
        }
    }

    /// Returns the static key of a base field, `None` for additional questions.
    pub fn base_key(&self) -> Option<&'static str> {
        let key = match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::SurveyTopic => "surveyTopic",
            FieldName::FavoriteProgrammingLanguage => "favoriteProgrammingLanguage",
            FieldName::YearsOfExperience => "yearsOfExperience",
            FieldName::ExerciseFrequency => "exerciseFrequency",
            FieldName::DietPreference => "dietPreference",
            FieldName::HighestQualification => "highestQualification",
            FieldName::FieldOfStudy => "fieldOfStudy",
            FieldName::Feedback => "feedback",
            FieldName::AdditionalQuestion(_) => return None,
        };
        Some(key)
    }

    /// True for `additionalQuestion{index}` fields.
    pub fn is_additional(&self) -> bool {
        matches!(self, FieldName::AdditionalQuestion(_))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for FieldName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(base) = FieldName::BASE
            .iter()
            .find(|name| name.base_key() == Some(s))
        {
            return Ok(*base);
        }

        s.strip_prefix(ADDITIONAL_QUESTION_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            // Only the canonical spelling produced by `key()` is accepted.
            .filter(|digits| digits.len() == 1 || !digits.starts_with('0'))
            .and_then(|digits| digits.parse().ok())
            .map(FieldName::AdditionalQuestion)
            .ok_or_else(|| ValidationError::unknown_field(s))
    }
}

impl Serialize for FieldName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for FieldName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Kind of input widget a field is rendered with.
///
/// Remote question descriptors may name kinds this crate does not know;
/// those are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Number,
    Select,
    Textarea,
    Other(String),
}

impl InputKind {
    pub fn as_str(&self) -> &str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Select => "select",
            InputKind::Textarea => "textarea",
            InputKind::Other(kind) => kind,
        }
    }
}

impl From<String> for InputKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "text" => InputKind::Text,
            "email" => InputKind::Email,
            "number" => InputKind::Number,
            "select" => InputKind::Select,
            "textarea" => InputKind::Textarea,
            _ => InputKind::Other(raw),
        }
    }
}

impl From<InputKind> for String {
    fn from(kind: InputKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_keys_parse_back() {
        for name in FieldName::BASE {
            assert_eq!(name.key().parse::<FieldName>(), Ok(name));
        }
    }

    #[test]
    fn additional_question_keys_carry_index() {
        assert_eq!(
            "additionalQuestion12".parse::<FieldName>(),
            Ok(FieldName::AdditionalQuestion(12))
        );
        assert_eq!(FieldName::AdditionalQuestion(0).key(), "additionalQuestion0");
    }

    #[test]
    fn malformed_additional_question_keys_are_unknown() {
        for raw in ["additionalQuestion", "additionalQuestion-1", "additionalQuestion1a"] {
            assert_eq!(
                raw.parse::<FieldName>(),
                Err(ValidationError::unknown_field(raw)),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn zero_padded_indices_are_unknown() {
        for raw in ["additionalQuestion00", "additionalQuestion01", "additionalQuestion007"] {
            assert_eq!(
                raw.parse::<FieldName>(),
                Err(ValidationError::unknown_field(raw)),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn additional_question_keys_are_canonical() {
        for raw in ["additionalQuestion0", "additionalQuestion10"] {
            let name: FieldName = raw.parse().unwrap();
            assert_eq!(name.key(), raw);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("favoriteColor".parse::<FieldName>().is_err());
    }

    #[test]
    fn field_name_serializes_as_key() {
        let json = serde_json::to_string(&FieldName::YearsOfExperience).unwrap();
        assert_eq!(json, "\"yearsOfExperience\"");
    }

    #[test]
    fn unknown_input_kind_is_preserved() {
        let kind: InputKind = serde_json::from_str("\"date\"").unwrap();
        assert_eq!(kind, InputKind::Other("date".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"date\"");
    }
}
