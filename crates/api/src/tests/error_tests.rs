// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prana::{CoreError, FormPhase};
use prana_domain::DomainError;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_unknown_field_becomes_invalid_input() {
    let err: ApiError = translate_core_error(CoreError::UnknownField {
        form: "class-booking",
        field: String::from("pose"),
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("pose"),
            message: String::from("Form 'class-booking' has no field named 'pose'"),
        }
    );
}

#[test]
fn test_not_editing_becomes_invalid_state() {
    let err: ApiError = ApiError::from(CoreError::NotEditing {
        form: "session-booking",
        phase: FormPhase::Submitted,
    });

    assert_eq!(
        err.to_string(),
        "Invalid state: Form 'session-booking' cannot be changed in the Submitted phase"
    );
}

#[test]
fn test_domain_errors_name_the_offending_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidCount {
        value: String::from("0"),
    });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "attendees"));

    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::MissingField {
            form: "seminar-inquiry",
            field: "organization",
        },
    ));
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "organization"));
}

#[test]
fn test_api_error_display() {
    let err: ApiError = ApiError::ResourceNotFound {
        resource_type: String::from("Form"),
        message: String::from("No booking form with id 'x'"),
    };
    assert_eq!(err.to_string(), "Form not found: No booking form with id 'x'");

    let err: ApiError = ApiError::InvalidInput {
        field: String::from("attendees"),
        message: String::from("bad"),
    };
    assert_eq!(err.to_string(), "Invalid input for field 'attendees': bad");
}
