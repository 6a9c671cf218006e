// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the booking forms.

use prana::{
    BookingForm, Command, FormState, NoticeChannel, SubmissionSink, SubmitOutcome,
    TransitionResult, apply,
};
use prana_domain::{FormSchema, ValidationError};

use crate::error::{ApiError, translate_core_error};
use crate::forms::FormKind;
use crate::request_response::{
    ApiResult, FormDescription, FormSummary, ListFormsResponse, SubmitBookingRequest,
    SubmitBookingResponse, ValidateFieldRequest, ValidateFieldResponse,
};

/// Lists every booking form offered on the site.
#[must_use]
pub fn list_forms() -> ListFormsResponse {
    ListFormsResponse {
        forms: FormKind::ALL
            .iter()
            .map(|kind| FormSummary {
                id: kind.id().to_string(),
                title: kind.schema().title.to_string(),
                page_path: kind.page_path().to_string(),
            })
            .collect(),
    }
}

/// Describes a form's fields, labels, required flags and options.
#[must_use]
pub fn describe_form(kind: FormKind) -> FormDescription {
    FormDescription::from(kind.schema())
}

/// Checks a single field value, as a form does when the visitor leaves
/// the field.
///
/// The value is checked in isolation; other fields are not considered.
///
/// # Arguments
///
/// * `kind` - The form the field belongs to
/// * `request` - The field name and raw value
///
/// # Returns
///
/// * `Ok(ValidateFieldResponse)` with the field's error, if any
/// * `Err(ApiError)` if the field is not part of the form
///
/// # Errors
///
/// Returns an error if the form does not declare the field.
pub fn validate_field(
    kind: FormKind,
    request: &ValidateFieldRequest,
) -> Result<ValidateFieldResponse, ApiError> {
    let schema: &'static FormSchema = kind.schema();

    let updated: TransitionResult = apply(
        schema,
        &FormState::new(),
        Command::UpdateField {
            name: request.field.clone(),
            value: request.value.clone(),
        },
    )
    .map_err(translate_core_error)?;

    let checked: TransitionResult = apply(
        schema,
        &updated.new_state,
        Command::ValidateField {
            name: request.field.clone(),
        },
    )
    .map_err(translate_core_error)?;

    let error: Option<ValidationError> = checked.new_state.errors.get(&request.field).cloned();

    Ok(ValidateFieldResponse {
        field: request.field.clone(),
        error,
    })
}

/// Submits a booking form via the API boundary.
///
/// This function:
/// - Builds a fresh form instance wired to the given collaborators
/// - Stores every submitted value
/// - Validates and submits the form
/// - Returns the response together with the resulting form state
///
/// A rejected submission is not an error: its per-field messages are part of
/// the response.
///
/// # Arguments
///
/// * `kind` - The form being submitted
/// * `request` - The raw values keyed by field name
/// * `notices` - Where the success notice is published
/// * `sink` - Where the accepted request is recorded
///
/// # Errors
///
/// Returns an error if a submitted field name is not part of the form.
pub fn submit_booking(
    kind: FormKind,
    request: &SubmitBookingRequest,
    notices: &dyn NoticeChannel,
    sink: &dyn SubmissionSink,
) -> Result<ApiResult<SubmitBookingResponse>, ApiError> {
    let mut form: BookingForm<'_> = BookingForm::new(kind.schema(), notices, sink);

    for (name, value) in &request.fields {
        form.update_field(name, value.as_str())?;
    }

    let response: SubmitBookingResponse = match form.submit()? {
        SubmitOutcome::Accepted { notice, .. } => SubmitBookingResponse::Submitted { notice },
        SubmitOutcome::Rejected(errors) => SubmitBookingResponse::Rejected { errors },
    };

    Ok(ApiResult {
        response,
        new_state: form.state().clone(),
    })
}
