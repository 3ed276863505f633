//! Field schema - static declaration of every base field.
//!
//! The table in [`FIELD_SCHEMA`] is the single source of truth for labels,
//! widgets, topic groups and constraints. Both the validation engine and the
//! visibility resolver read applicability from here, so they cannot drift.

use super::field::{FieldName, InputKind};
use super::topic::SurveyTopic;

/// When a field participates in validation and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// Shown and validated regardless of topic.
    Always,
    /// Shown and validated only while the given topic is selected.
    OnlyFor(SurveyTopic),
}

impl Applicability {
    pub fn applies_to(&self, topic: Option<SurveyTopic>) -> bool {
        match self {
            Applicability::Always => true,
            Applicability::OnlyFor(group) => topic == Some(*group),
        }
    }
}

/// A single rule applied to a field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be non-empty.
    Required,
    /// Non-empty value must look like an email address.
    Email,
    /// Non-empty value must parse as a number that is at least zero.
    NonNegativeNumber,
    /// Non-empty value must be at least this many characters long.
    MinLength(usize),
}

/// Declaration of one base field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: InputKind,
    pub choices: &'static [&'static str],
    pub applicability: Applicability,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    pub fn is_applicable(&self, topic: Option<SurveyTopic>) -> bool {
        self.applicability.applies_to(topic)
    }
}

const REQUIRED: &[Constraint] = &[Constraint::Required];

/// Every base field, in display order.
pub static FIELD_SCHEMA: [FieldSpec; 10] = [
    FieldSpec {
        name: FieldName::FullName,
        label: "Full Name",
        kind: InputKind::Text,
        choices: &[],
        applicability: Applicability::Always,
        constraints: REQUIRED,
    },
    FieldSpec {
        name: FieldName::Email,
        label: "Email",
        kind: InputKind::Email,
        choices: &[],
        applicability: Applicability::Always,
        constraints: &[Constraint::Required, Constraint::Email],
    },
    FieldSpec {
        name: FieldName::SurveyTopic,
        label: "Survey Topic",
        kind: InputKind::Select,
        choices: &["Technology", "Health", "Education"],
        applicability: Applicability::Always,
        constraints: REQUIRED,
    },
    FieldSpec {
        name: FieldName::FavoriteProgrammingLanguage,
        label: "Favorite Programming Language",
        kind: InputKind::Select,
        choices: &["JavaScript", "Python", "Java", "C#"],
        applicability: Applicability::OnlyFor(SurveyTopic::Technology),
        constraints: REQUIRED,
    },
    FieldSpec {
        name: FieldName::YearsOfExperience,
        label: "Years of Experience",
        kind: InputKind::Number,
        choices: &[],
        applicability: Applicability::OnlyFor(SurveyTopic::Technology),
        constraints: &[Constraint::Required, Constraint::NonNegativeNumber],
    },
    FieldSpec {
        name: FieldName::ExerciseFrequency,
        label: "Exercise Frequency",
        kind: InputKind::Select,
        choices: &["Daily", "Weekly", "Monthly", "Rarely"],
        applicability: Applicability::OnlyFor(SurveyTopic::Health),
        constraints: REQUIRED,
    },
    FieldSpec {
        name: FieldName::DietPreference,
        label: "Diet Preference",
        kind: InputKind::Select,
        choices: &["Vegetarian", "Vegan", "Non-Vegetarian"],
        applicability: Applicability::OnlyFor(SurveyTopic::Health),
        constraints: REQUIRED,
    },
    FieldSpec {
        name: FieldName::HighestQualification,
        label: "Highest Qualification",
        kind: InputKind::Select,
        choices: &["High School", "Bachelor's", "Master's", "PhD"],
        applicability: Applicability::OnlyFor(SurveyTopic::Education),
        constraints: REQUIRED,
    },
    FieldSpec {
        name: FieldName::FieldOfStudy,
        label: "Field of Study",
        kind: InputKind::Text,
        choices: &[],
        applicability: Applicability::OnlyFor(SurveyTopic::Education),
        constraints: REQUIRED,
    },
    FieldSpec {
        name: FieldName::Feedback,
        label: "Feedback",
        kind: InputKind::Textarea,
        choices: &[],
        applicability: Applicability::Always,
        constraints: &[Constraint::Required, Constraint::MinLength(50)],
    },
];

/// Looks up the declaration of a base field.
pub fn spec_for(field: FieldName) -> Option<&'static FieldSpec> {
    FIELD_SCHEMA.iter().find(|spec| spec.name == field)
}

/// Whether a field matters for the given topic.
///
/// Additional questions are applicable whenever they are loaded; the form
/// controller tracks which are.
pub fn is_applicable(field: FieldName, topic: Option<SurveyTopic>) -> bool {
    match spec_for(field) {
        Some(spec) => spec.is_applicable(topic),
        None => field.is_additional(),
    }
}

/// Base fields that apply to the given topic, in display order.
pub fn applicable_fields(topic: Option<SurveyTopic>) -> impl Iterator<Item = &'static FieldSpec> {
    FIELD_SCHEMA
        .iter()
        .filter(move |spec| spec.is_applicable(topic))
}

/// Fields belonging to one topic group.
pub fn group_fields(group: SurveyTopic) -> impl Iterator<Item = FieldName> {
    FIELD_SCHEMA
        .iter()
        .filter(move |spec| spec.applicability == Applicability::OnlyFor(group))
        .map(|spec| spec.name)
}

/// Topic group shown for the given topic, if any.
pub fn visible_group(topic: Option<SurveyTopic>) -> Option<SurveyTopic> {
    topic.filter(|t| group_fields(*t).next().is_some())
}
