// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prana_domain::{BookingRequest, FieldErrors, FormValues};
use serde::Serialize;

/// The phase of a booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum FormPhase {
    /// Fields are editable. Initial phase.
    #[default]
    Editing,
    /// The request was accepted; the confirmation view replaces the form.
    Submitted,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FormPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Submitted => "Submitted",
        }
    }

    /// Checks if a transition from this phase to another is valid.
    ///
    /// Valid transitions are:
    /// - Editing → Submitted (successful submit)
    /// - Submitted → Editing (reset)
    /// - Editing → Editing (reset while editing)
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Editing, Self::Submitted | Self::Editing) | (Self::Submitted, Self::Editing)
        )
    }

    /// Returns whether field values may change in this phase.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// The working state of one booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Current phase.
    pub phase: FormPhase,
    /// Raw values as entered.
    pub values: FormValues,
    /// Active per-field errors.
    pub errors: FieldErrors,
    /// Whether a full validation pass has happened since the last reset.
    /// Once set, edits re-check the edited field immediately.
    pub validated: bool,
}

impl FormState {
    /// Creates an empty, editable state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: FormPhase::Editing,
            values: FormValues::new(),
            errors: FieldErrors::new(),
            validated: false,
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: FormState,
    /// The accepted request, present only when a submit passed validation.
    pub submission: Option<BookingRequest>,
}
