//! Survey module - field schema, validation engine and visibility resolver.
//!
//! Everything here is pure: no I/O, no clocks, no shared state. The form
//! controller in [`crate::domain::form`] owns the mutable state and calls in.

mod field;
mod question;
mod schema;
mod topic;
mod validation;
mod values;

pub use field::{FieldName, InputKind};
pub use question::{AdditionalQuestion, QuestionDescriptor, QuestionPolicy};
pub use schema::{
    applicable_fields, group_fields, is_applicable, spec_for, visible_group, Applicability,
    Constraint, FieldSpec, FIELD_SCHEMA,
};
pub use topic::SurveyTopic;
pub use validation::{validate, validate_form, ErrorMap, INVALID_EMAIL, NEGATIVE_NUMBER, NOT_A_NUMBER};
pub use values::{FieldValue, FieldValues, TouchedSet};
