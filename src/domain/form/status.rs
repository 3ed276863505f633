//! FormStatus - lifecycle of a mounted survey form.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a survey form.
///
/// `Submitted` is terminal: there is no reset back to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl FormStatus {
    /// Returns true if values may still change.
    pub fn is_editable(&self) -> bool {
        matches!(self, FormStatus::Editing)
    }
}

impl StateMachine for FormStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FormStatus::*;
        matches!(
            (self, target),
            (Editing, Submitting) | (Submitting, Editing) | (Submitting, Submitted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FormStatus::*;
        match self {
            Editing => vec![Submitting],
            Submitting => vec![Editing, Submitted],
            Submitted => vec![],
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormStatus::Editing => "Editing",
            FormStatus::Submitting => "Submitting",
            FormStatus::Submitted => "Submitted",
        };
        write!(f, "{}", s)
    }
}
