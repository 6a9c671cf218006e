// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::notice::{Notice, NoticeChannel, SubmissionSink};
use crate::state::{FormPhase, FormState, TransitionResult};
use prana_domain::{BookingRequest, FieldErrors, FormSchema, FormValues, ValidationError};
use tracing::debug;

/// What a submit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form moved to `Submitted`.
    Accepted {
        /// The accepted request, as handed to the sink.
        request: BookingRequest,
        /// The notice that was published.
        notice: Notice,
    },
    /// At least one field failed; the form stays editable.
    Rejected(FieldErrors),
}

/// One booking form instance.
///
/// Owns its working state exclusively. The notice channel and submission
/// sink are supplied by the caller, so each page decides where notices and
/// requests go.
pub struct BookingForm<'a> {
    schema: &'static FormSchema,
    state: FormState,
    notices: &'a dyn NoticeChannel,
    sink: &'a dyn SubmissionSink,
}

impl<'a> BookingForm<'a> {
    /// Creates an empty, editable form.
    ///
    /// # Arguments
    ///
    /// * `schema` - The field table and texts of this form
    /// * `notices` - Where the success notice is published
    /// * `sink` - Where accepted requests are recorded
    #[must_use]
    pub fn new(
        schema: &'static FormSchema,
        notices: &'a dyn NoticeChannel,
        sink: &'a dyn SubmissionSink,
    ) -> Self {
        Self {
            schema,
            state: FormState::new(),
            notices,
            sink,
        }
    }

    /// Returns the form's schema.
    #[must_use]
    pub const fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// Returns the full working state.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.state.phase
    }

    /// Returns the raw values as entered.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.state.values
    }

    /// Returns the active per-field errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    /// Stores a raw value for a field.
    ///
    /// After the first submit attempt the field is re-checked so a
    /// corrected value clears its error right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is unknown or the form was submitted.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), CoreError> {
        self.execute(Command::UpdateField {
            name: name.to_string(),
            value: value.into(),
        })
        .map(|_| ())
    }

    /// Re-checks a single field, as when the visitor leaves it.
    ///
    /// Returns the field's error, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is unknown or the form was submitted.
    pub fn validate_field(&mut self, name: &str) -> Result<Option<&ValidationError>, CoreError> {
        self.execute(Command::ValidateField {
            name: name.to_string(),
        })?;
        Ok(self.state.errors.get(name))
    }

    /// Validates every field and submits the request if all pass.
    ///
    /// On success the request goes to the sink, exactly one notice is
    /// published and the form moves to `Submitted`. On failure nothing
    /// leaves the form.
    ///
    /// # Errors
    ///
    /// Returns an error if the form was already submitted.
    pub fn submit(&mut self) -> Result<SubmitOutcome, CoreError> {
        let Some(request) = self.execute(Command::Submit)? else {
            debug!(
                form = self.schema.id,
                errors = self.state.errors.len(),
                "Booking request rejected"
            );
            return Ok(SubmitOutcome::Rejected(self.state.errors.clone()));
        };

        self.sink.record(&request);
        let notice: Notice = Notice::from(self.schema.notice);
        self.notices.publish(notice.clone());
        debug!(form = self.schema.id, "Booking request accepted");

        Ok(SubmitOutcome::Accepted { request, notice })
    }

    /// Returns to an empty, editable form, clearing values and errors.
    pub fn reset_to_form(&mut self) {
        self.state = FormState::new();
    }

    fn execute(&mut self, command: Command) -> Result<Option<BookingRequest>, CoreError> {
        let result: TransitionResult = apply(self.schema, &self.state, command)?;
        self.state = result.new_state;
        Ok(result.submission)
    }
}
