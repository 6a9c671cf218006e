// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use prana::CoreError;
use prana_domain::{ATTENDEES, DomainError, PREFERRED_DATE};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Validation failures of visitor input are not errors at this layer; they
/// are reported as a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The form is not in a state that allows the operation.
    InvalidState {
        /// A human-readable description of the conflict.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidState { message } => {
                write!(f, "Invalid state: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingField { form, field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Form '{form}' requires a value for '{field}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: PREFERRED_DATE.to_string(),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidCount { value } => ApiError::InvalidInput {
            field: ATTENDEES.to_string(),
            message: format!("Invalid count '{value}': must be a whole number of at least 1"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::UnknownField { form, field } => ApiError::InvalidInput {
            message: format!("Form '{form}' has no field named '{field}'"),
            field,
        },
        CoreError::NotEditing { form, phase } => ApiError::InvalidState {
            message: format!("Form '{form}' cannot be changed in the {phase} phase"),
        },
    }
}
