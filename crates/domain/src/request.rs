// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::field::{
    ATTENDEES, CATEGORY, CONTACT_EMAIL, CONTACT_PHONE, FULL_NAME, LOCATION, NOTE, ORGANIZATION,
    PREFERRED_DATE,
};
use crate::schema::FormSchema;
use crate::validation::{parse_calendar_date, parse_count};
use crate::values::FormValues;
use serde::Serialize;
use time::Date;

/// A validated booking request.
///
/// Only built from values that passed the owning schema's validation. Fields
/// the form does not collect, or optional fields left empty, are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    /// The form this request was submitted through.
    pub form: &'static str,
    /// The visitor's full name.
    pub full_name: String,
    /// The visitor's phone number.
    pub contact_phone: String,
    /// The visitor's email address, if provided.
    pub contact_email: Option<String>,
    /// The selected session type, class or program.
    pub category: Option<String>,
    /// The preferred session date.
    pub preferred_date: Option<Date>,
    /// Free-form message.
    pub note: Option<String>,
    /// Requesting organization (seminars).
    pub organization: Option<String>,
    /// Expected attendee count (seminars).
    pub attendees: Option<u32>,
    /// Event location (seminars).
    pub location: Option<String>,
}

impl BookingRequest {
    /// Builds a request from values that passed `schema.validate`.
    ///
    /// # Arguments
    ///
    /// * `schema` - The form the values were collected by
    /// * `values` - The validated working values
    ///
    /// # Errors
    ///
    /// Returns an error if the schema lacks a name or phone field, or a
    /// date or count value does not parse. Neither happens for values that
    /// passed validation against a schema declaring those fields.
    pub fn from_values(schema: &FormSchema, values: &FormValues) -> Result<Self, DomainError> {
        let required = |field: &'static str| -> Result<String, DomainError> {
            values
                .provided(field)
                .map(str::to_string)
                .ok_or(DomainError::MissingField {
                    form: schema.id,
                    field,
                })
        };
        let optional = |field: &str| -> Option<String> { values.provided(field).map(str::to_string) };

        let preferred_date: Option<Date> = values
            .provided(PREFERRED_DATE)
            .map(parse_calendar_date)
            .transpose()?;
        let attendees: Option<u32> = values.provided(ATTENDEES).map(parse_count).transpose()?;

        Ok(Self {
            form: schema.id,
            full_name: required(FULL_NAME)?,
            contact_phone: required(CONTACT_PHONE)?,
            contact_email: optional(CONTACT_EMAIL),
            category: optional(CATEGORY),
            preferred_date,
            note: optional(NOTE),
            organization: optional(ORGANIZATION),
            attendees,
            location: optional(LOCATION),
        })
    }
}
