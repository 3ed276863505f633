//! Form-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::survey::ErrorMap;

/// Errors returned by the form controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Field name is not part of the form right now.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The form reached its terminal state.
    #[error("Form has already been submitted")]
    AlreadySubmitted,

    /// A lifecycle transition was rejected.
    #[error("Invalid form state: {0}")]
    InvalidState(String),

    /// Submission blocked by field errors.
    #[error("Form has {} invalid field(s)", .0.len())]
    ValidationFailed(ErrorMap),
}

impl FormError {
    pub fn unknown_field(field: impl Into<String>) -> Self {
        FormError::UnknownField(field.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FormError::UnknownField(_) => ErrorCode::UnknownField,
            FormError::AlreadySubmitted => ErrorCode::FormSubmitted,
            FormError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            FormError::ValidationFailed(_) => ErrorCode::ValidationFailed,
        }
    }

    /// Field errors carried by a failed submission.
    pub fn field_errors(&self) -> Option<&ErrorMap> {
        match self {
            FormError::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownField { field } => FormError::UnknownField(field),
            other => FormError::InvalidState(other.to_string()),
        }
    }
}

impl From<FormError> for DomainError {
    fn from(err: FormError) -> Self {
        let code = err.code();
        let mut domain = DomainError::new(code, err.to_string());
        if let FormError::ValidationFailed(errors) = &err {
            for (field, message) in errors.iter() {
                domain = domain.with_detail(field.key(), message);
            }
        }
        domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::FieldName;

    #[test]
    fn unknown_field_validation_error_converts() {
        let err: FormError = ValidationError::unknown_field("favoriteColor").into();
        assert_eq!(err, FormError::unknown_field("favoriteColor"));
        assert_eq!(err.code(), ErrorCode::UnknownField);
    }

    #[test]
    fn validation_failed_counts_fields() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Email, "Email is required");
        errors.insert(FieldName::Feedback, "Feedback is required");

        let err = FormError::ValidationFailed(errors);
        assert_eq!(err.to_string(), "Form has 2 invalid field(s)");
        assert_eq!(err.field_errors().map(ErrorMap::len), Some(2));
    }

    #[test]
    fn domain_error_carries_field_messages() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Email, "Invalid email format");

        let domain: DomainError = FormError::ValidationFailed(errors).into();
        assert_eq!(domain.code, ErrorCode::ValidationFailed);
        assert_eq!(
            domain.details.get("email"),
            Some(&"Invalid email format".to_string())
        );
    }
}
