// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod catalog;
mod error;
mod field;
mod request;
mod schema;
mod validation;
mod values;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use field::{
    ATTENDEES, CATEGORY, CONTACT_EMAIL, CONTACT_PHONE, ChoiceOption, FULL_NAME, FieldRule,
    FieldSpec, InputKind, LOCATION, NOTE, ORGANIZATION, PREFERRED_DATE,
};
pub use request::BookingRequest;
pub use schema::{ConfirmationText, FormSchema, NoticeText};
pub use validation::{
    FieldErrors, ValidationError, ValidationErrorKind, check_field, is_valid_email,
    parse_calendar_date, parse_count, validate_values,
};
pub use values::FormValues;
