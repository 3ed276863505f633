//! Submission - the payload emitted when a form validates.

use serde::Serialize;

use crate::domain::foundation::{FormId, Timestamp};
use crate::domain::survey::{FieldValues, SurveyTopic};

/// Completed survey, handed to a submission sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form_id: FormId,
    pub submitted_at: Timestamp,
    /// Every base field plus the loaded `additionalQuestion{i}` entries.
    pub values: FieldValues,
}

impl Submission {
    pub fn topic(&self) -> Option<SurveyTopic> {
        self.values.topic()
    }

    /// Values only, indented with two spaces.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::FieldName;

    #[test]
    fn pretty_json_lists_values_with_two_space_indent() {
        let mut values = FieldValues::default();
        values.set(FieldName::FullName, "Jane Doe".into());

        let submission = Submission {
            form_id: FormId::new(),
            submitted_at: Timestamp::now(),
            values,
        };

        assert_eq!(
            submission.to_pretty_json().unwrap(),
            "{\n  \"fullName\": \"Jane Doe\"\n}"
        );
    }

    #[test]
    fn envelope_uses_camel_case_keys() {
        let submission = Submission {
            form_id: FormId::new(),
            submitted_at: Timestamp::now(),
            values: FieldValues::initial(),
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("formId").is_some());
        assert!(json.get("submittedAt").is_some());
        assert_eq!(json["values"]["feedback"], "");
    }
}
