// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while turning validated values into domain types.
///
/// These indicate a schema and its consumer disagree; visitor input never
/// produces them once validation has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field required to build a booking request is missing.
    MissingField {
        /// The form the request was built for.
        form: &'static str,
        /// The missing field.
        field: &'static str,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A count value is not a positive whole number.
    InvalidCount {
        /// The invalid value.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { form, field } => {
                write!(f, "Form '{form}' is missing required field '{field}'")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidCount { value } => {
                write!(f, "Invalid count '{value}': must be a whole number of at least 1")
            }
        }
    }
}

impl std::error::Error for DomainError {}
