// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::field::FieldSpec;
use crate::validation::{FieldErrors, ValidationError, check_field, validate_values};
use crate::values::FormValues;

/// Text shown in the transient notice after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeText {
    /// Short title.
    pub title: &'static str,
    /// One-sentence description.
    pub description: &'static str,
}

/// Text of the confirmation view that replaces the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationText {
    /// Heading of the acknowledgment.
    pub heading: &'static str,
    /// Body of the acknowledgment.
    pub body: &'static str,
    /// Label of the single reset control.
    pub reset_label: &'static str,
}

/// A declarative booking form: its field table plus the text it shows.
///
/// Every booking form on the site is one `static` value of this type; the
/// lifecycle logic is shared and never specialized per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    /// Stable identifier, used in URLs and logs.
    pub id: &'static str,
    /// Heading above the form.
    pub title: &'static str,
    /// Label of the submit control.
    pub submit_label: &'static str,
    /// The field table, in display order.
    pub fields: &'static [FieldSpec],
    /// Notice published on success.
    pub notice: NoticeText,
    /// Confirmation view shown on success.
    pub confirmation: ConfirmationText,
}

impl FormSchema {
    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Returns true if the schema declares the field.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Validates every field against the working values.
    #[must_use]
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        validate_values(self.fields, values)
    }

    /// Validates a single declared field against the working values.
    ///
    /// # Errors
    ///
    /// Returns the field's first violated constraint.
    pub fn validate_field(
        &self,
        spec: &FieldSpec,
        values: &FormValues,
    ) -> Result<(), ValidationError> {
        check_field(spec, values.get(spec.name))
    }
}
