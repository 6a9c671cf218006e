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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod forms;
mod handlers;
mod request_response;
mod sink;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use forms::{CLASS_BOOKING, FormKind, SEMINAR_INQUIRY, SESSION_BOOKING};
pub use handlers::{describe_form, list_forms, submit_booking, validate_field};
pub use request_response::{
    ApiResult, FieldDescription, FormDescription, FormSummary, ListFormsResponse,
    OptionDescription, SubmitBookingRequest, SubmitBookingResponse, ValidateFieldRequest,
    ValidateFieldResponse,
};
pub use sink::TracingSink;
