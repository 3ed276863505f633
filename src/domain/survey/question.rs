//! Additional questions fetched at runtime.

use serde::{Deserialize, Serialize};

use super::field::{FieldName, InputKind};

/// Question as described by the question service: `{ "label", "type" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: InputKind,
}

impl QuestionDescriptor {
    pub fn new(label: impl Into<String>, kind: InputKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// A loaded question bound to its positional slot in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdditionalQuestion {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub index: usize,
}

impl AdditionalQuestion {
    /// Field under which the answer to this question is stored.
    pub fn field_name(&self) -> FieldName {
        FieldName::AdditionalQuestion(self.index)
    }

    /// Assigns each descriptor the index of its position in the response.
    pub fn index_all(descriptors: Vec<QuestionDescriptor>) -> Vec<AdditionalQuestion> {
        descriptors
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| AdditionalQuestion {
                label: descriptor.label,
                kind: descriptor.kind,
                index,
            })
            .collect()
    }
}

/// Whether answers to additional questions are mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionPolicy {
    /// Questions are editable but never block submission.
    #[default]
    Optional,
    /// Every loaded question must be answered.
    Required,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_reads_type_key() {
        let parsed: Vec<QuestionDescriptor> =
            serde_json::from_str(r#"[{"label":"Sleep hours","type":"number"}]"#).unwrap();
        assert_eq!(
            parsed,
            vec![QuestionDescriptor::new("Sleep hours", InputKind::Number)]
        );
    }

    #[test]
    fn descriptor_without_type_defaults_to_text() {
        let parsed: QuestionDescriptor = serde_json::from_str(r#"{"label":"Anything else?"}"#).unwrap();
        assert_eq!(parsed.kind, InputKind::Text);
    }

    #[test]
    fn descriptor_without_label_is_rejected() {
        assert!(serde_json::from_str::<QuestionDescriptor>(r#"{"type":"text"}"#).is_err());
    }

    #[test]
    fn index_all_uses_array_position() {
        let questions = AdditionalQuestion::index_all(vec![
            QuestionDescriptor::new("Sleep hours", InputKind::Number),
            QuestionDescriptor::new("Favourite sport", InputKind::Text),
        ]);

        assert_eq!(questions[0].index, 0);
        assert_eq!(questions[1].index, 1);
        assert_eq!(questions[1].field_name(), FieldName::AdditionalQuestion(1));
    }
}
