// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::FormPhase;
use prana_domain::DomainError;

/// Errors that can occur during form transitions.
///
/// Visitor input never produces these; validation failures are reported
/// through the form's error mapping instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The field is not declared by the form's schema.
    UnknownField {
        /// The form that was addressed.
        form: &'static str,
        /// The undeclared field name.
        field: String,
    },
    /// The command is only valid while editing.
    NotEditing {
        /// The form that was addressed.
        form: &'static str,
        /// The phase the form was in.
        phase: FormPhase,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::UnknownField { form, field } => {
                write!(f, "Form '{form}' has no field named '{field}'")
            }
            Self::NotEditing { form, phase } => {
                write!(f, "Form '{form}' is not editable in the {phase} phase")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
