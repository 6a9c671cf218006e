// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{FormPhase, FormState, TransitionResult};
use prana_domain::{BookingRequest, FieldErrors, FieldSpec, FormSchema};

/// Applies a command to the current state, producing a new state.
///
/// This function is pure: it performs no I/O and never mutates its input.
/// Publishing a notice or recording an accepted request is left to the
/// caller, which learns about an acceptance through
/// `TransitionResult::submission`.
///
/// # Arguments
///
/// * `schema` - The form's field table
/// * `state` - The current form state
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state
/// * `Err(CoreError)` if the command does not fit the form or its phase
///
/// # Errors
///
/// Returns an error if:
/// - The command names a field the schema does not declare
/// - A field is edited, checked or submitted after the form was submitted
/// - A validated request cannot be built from its values
pub fn apply(
    schema: &FormSchema,
    state: &FormState,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::UpdateField { name, value } => update_field(schema, state, &name, value),
        Command::ValidateField { name } => validate_field(schema, state, &name),
        Command::Submit => submit(schema, state),
        Command::Reset => {
            ensure_transition(schema, state, FormPhase::Editing)?;
            Ok(TransitionResult {
                new_state: FormState::new(),
                submission: None,
            })
        }
    }
}

/// Rejects a command whose phase change the state machine does not allow.
fn ensure_transition(
    schema: &FormSchema,
    state: &FormState,
    target: FormPhase,
) -> Result<(), CoreError> {
    if state.phase.can_transition_to(target) {
        Ok(())
    } else {
        Err(CoreError::NotEditing {
            form: schema.id,
            phase: state.phase,
        })
    }
}

fn ensure_editable(schema: &FormSchema, state: &FormState) -> Result<(), CoreError> {
    if state.phase.is_editable() {
        Ok(())
    } else {
        Err(CoreError::NotEditing {
            form: schema.id,
            phase: state.phase,
        })
    }
}

fn lookup_field(schema: &FormSchema, name: &str) -> Result<&'static FieldSpec, CoreError> {
    schema.field(name).ok_or_else(|| CoreError::UnknownField {
        form: schema.id,
        field: name.to_string(),
    })
}

/// Re-checks one field and updates only its entry in the error mapping.
fn recheck(schema: &FormSchema, spec: &FieldSpec, state: &mut FormState) {
    match schema.validate_field(spec, &state.values) {
        Ok(()) => state.errors.remove(spec.name),
        Err(error) => state.errors.insert(spec.name, error),
    }
}

fn update_field(
    schema: &FormSchema,
    state: &FormState,
    name: &str,
    value: String,
) -> Result<TransitionResult, CoreError> {
    ensure_editable(schema, state)?;
    let spec: &'static FieldSpec = lookup_field(schema, name)?;

    let mut new_state: FormState = state.clone();
    new_state.values.set(spec.name, value);

    // Before the first submit, typing never surfaces errors.
    if new_state.validated {
        recheck(schema, spec, &mut new_state);
    }

    Ok(TransitionResult {
        new_state,
        submission: None,
    })
}

fn validate_field(
    schema: &FormSchema,
    state: &FormState,
    name: &str,
) -> Result<TransitionResult, CoreError> {
    ensure_editable(schema, state)?;
    let spec: &'static FieldSpec = lookup_field(schema, name)?;

    let mut new_state: FormState = state.clone();
    recheck(schema, spec, &mut new_state);

    Ok(TransitionResult {
        new_state,
        submission: None,
    })
}

fn submit(schema: &FormSchema, state: &FormState) -> Result<TransitionResult, CoreError> {
    ensure_transition(schema, state, FormPhase::Submitted)?;

    let errors: FieldErrors = schema.validate(&state.values);
    if !errors.is_empty() {
        // Recoverable: values stay as entered, the phase does not change.
        return Ok(TransitionResult {
            new_state: FormState {
                phase: FormPhase::Editing,
                values: state.values.clone(),
                errors,
                validated: true,
            },
            submission: None,
        });
    }

    let request: BookingRequest = BookingRequest::from_values(schema, &state.values)?;

    Ok(TransitionResult {
        new_state: FormState {
            phase: FormPhase::Submitted,
            values: state.values.clone(),
            errors: FieldErrors::new(),
            validated: true,
        },
        submission: Some(request),
    })
}
