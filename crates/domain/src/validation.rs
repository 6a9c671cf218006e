// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::field::{FieldRule, FieldSpec};
use crate::values::FormValues;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime};

#[allow(clippy::expect_used)] // Constant pattern, exercised by the validation tests
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regular expression")
});

/// The kind of constraint a field value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    /// A required field was empty at submit time.
    MissingRequired,
    /// A text value is below its minimum length.
    TooShort,
    /// A present value is malformed.
    InvalidFormat,
}

impl ValidationErrorKind {
    /// Returns the stable name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequired => "MissingRequired",
            Self::TooShort => "TooShort",
            Self::InvalidFormat => "InvalidFormat",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field's violation, carrying the message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    /// What went wrong.
    pub kind: ValidationErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Mapping from field name to its single active error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, ValidationError>,
}

impl FieldErrors {
    /// Creates an empty error mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Sets the error for a field, replacing any previous one.
    pub fn insert(&mut self, field: &'static str, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Clears the error for a field.
    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Returns the active error for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Returns the kind of the active error for a field.
    #[must_use]
    pub fn kind(&self, field: &str) -> Option<ValidationErrorKind> {
        self.errors.get(field).map(|error| error.kind)
    }

    /// Returns true if a field has an active error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Returns true if no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

}

/// Checks one field's raw value against its spec.
///
/// Rules run in order and the first failure wins: presence, then the
/// field's own rule. Only an absent or empty value counts as not provided
/// for an optional field; whitespace still goes through the field's rule.
/// A required field consisting only of whitespace is missing.
///
/// # Errors
///
/// Returns the first violated constraint.
pub fn check_field(spec: &FieldSpec, raw: Option<&str>) -> Result<(), ValidationError> {
    let present: Option<&str> = if spec.required {
        raw.filter(|value| !value.trim().is_empty())
    } else {
        raw.filter(|value| !value.is_empty())
    };

    let Some(value) = present else {
        if spec.required {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingRequired,
                spec.missing_text(),
            ));
        }
        return Ok(());
    };

    let satisfied: bool = match spec.rule {
        FieldRule::Text { min_len } => {
            if value.chars().count() < min_len {
                return Err(ValidationError::new(
                    ValidationErrorKind::TooShort,
                    spec.message,
                ));
            }
            true
        }
        FieldRule::Email => is_valid_email(value),
        FieldRule::Choice(options) => options.iter().any(|option| option.value == value),
        FieldRule::Date => parse_calendar_date(value).is_ok(),
        FieldRule::Count => parse_count(value).is_ok(),
        FieldRule::FreeText => true,
    };

    if satisfied {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidFormat,
            spec.message,
        ))
    }
}

/// Validates every field of a table independently.
///
/// Constraints never interact across fields; the result holds at most one
/// error per field and is empty when the values are valid.
#[must_use]
pub fn validate_values(fields: &[FieldSpec], values: &FormValues) -> FieldErrors {
    let mut errors: FieldErrors = FieldErrors::new();
    for spec in fields {
        if let Err(error) = check_field(spec, values.get(spec.name)) {
            errors.insert(spec.name, error);
        }
    }
    errors
}

/// Returns true if the value is shaped like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Parses a calendar date.
///
/// Accepts ISO 8601 calendar dates (`2026-04-01`, the format of a browser
/// date picker) and RFC 3339 date-times, whose date part is kept.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if neither format matches.
pub fn parse_calendar_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, &Iso8601::DEFAULT)
        .or_else(|_| OffsetDateTime::parse(value, &Rfc3339).map(OffsetDateTime::date))
        .map_err(|err| DomainError::DateParseError {
            date_string: value.to_string(),
            error: err.to_string(),
        })
}

/// Parses a positive whole number such as an attendee count.
///
/// # Errors
///
/// Returns `DomainError::InvalidCount` for zero, negatives, fractions and
/// anything that is not a number.
pub fn parse_count(value: &str) -> Result<u32, DomainError> {
    match value.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(DomainError::InvalidCount {
            value: value.to_string(),
        }),
    }
}
