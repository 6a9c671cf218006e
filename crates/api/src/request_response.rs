// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use prana::{FormState, Notice};
use prana_domain::{FieldErrors, FieldSpec, FormSchema, InputKind, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of one booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    /// The form identifier used in API paths.
    pub id: String,
    /// The heading shown above the form.
    pub title: String,
    /// The page hosting the form.
    pub page_path: String,
}

/// API response listing every booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFormsResponse {
    /// The forms, in navigation order.
    pub forms: Vec<FormSummary>,
}

/// One selectable value of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescription {
    /// The submitted value.
    pub value: String,
    /// The human-readable label.
    pub label: String,
}

/// Description of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// The field name used in submissions.
    pub name: String,
    /// The label shown next to the input.
    pub label: String,
    /// Whether the field must be filled in.
    pub required: bool,
    /// The input control kind (`text`, `tel`, `email`, ...).
    pub input: String,
    /// Placeholder text.
    pub placeholder: String,
    /// Allowed values, for choice fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDescription>,
}

impl From<&FieldSpec> for FieldDescription {
    fn from(spec: &FieldSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            required: spec.required,
            input: input_name(spec.input).to_string(),
            placeholder: spec.placeholder.to_string(),
            options: spec
                .options()
                .iter()
                .map(|option| OptionDescription {
                    value: option.value.to_string(),
                    label: option.label.to_string(),
                })
                .collect(),
        }
    }
}

const fn input_name(input: InputKind) -> &'static str {
    match input {
        InputKind::Text => "text",
        InputKind::Tel => "tel",
        InputKind::Email => "email",
        InputKind::Select => "select",
        InputKind::Date => "date",
        InputKind::Number => "number",
        InputKind::TextArea => "text_area",
    }
}

/// API response describing a form's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDescription {
    /// The form identifier.
    pub id: String,
    /// The heading shown above the form.
    pub title: String,
    /// Label of the submit control.
    pub submit_label: String,
    /// The fields, in display order.
    pub fields: Vec<FieldDescription>,
}

impl From<&FormSchema> for FormDescription {
    fn from(schema: &FormSchema) -> Self {
        Self {
            id: schema.id.to_string(),
            title: schema.title.to_string(),
            submit_label: schema.submit_label.to_string(),
            fields: schema.fields.iter().map(FieldDescription::from).collect(),
        }
    }
}

/// API request to check a single field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateFieldRequest {
    /// The field to check.
    pub field: String,
    /// The raw value.
    #[serde(default)]
    pub value: String,
}

/// API response for a single field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateFieldResponse {
    /// The checked field.
    pub field: String,
    /// The field's error, if the value violates a constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

/// API request to submit a booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBookingRequest {
    /// Raw values keyed by field name.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// API response for a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitBookingResponse {
    /// Every field passed and the request was handed off.
    Submitted {
        /// The notice that was published.
        notice: Notice,
    },
    /// At least one field failed.
    Rejected {
        /// One message per failing field.
        errors: FieldErrors,
    },
}

impl SubmitBookingResponse {
    /// Returns true if the submission was accepted.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

/// The result of an API operation that drives a form.
///
/// Carries the response for the caller together with the form state after
/// the operation, so an HTML surface can re-render entered values and errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The form state after the operation.
    pub new_state: FormState,
}
