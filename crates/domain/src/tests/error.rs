// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ValidationError, ValidationErrorKind};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingField {
        form: "book-session",
        field: "full_name",
    };
    assert_eq!(
        format!("{err}"),
        "Form 'book-session' is missing required field 'full_name'"
    );

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("soon"),
        error: String::from("bad"),
    };
    assert_eq!(format!("{err}"), "Failed to parse date 'soon': bad");

    let err: DomainError = DomainError::InvalidCount {
        value: String::from("0"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid count '0': must be a whole number of at least 1"
    );
}

#[test]
fn test_validation_error_displays_its_message() {
    let err: ValidationError = ValidationError::new(
        ValidationErrorKind::TooShort,
        "Name must be at least 2 characters.",
    );
    assert_eq!(format!("{err}"), "Name must be at least 2 characters.");
}
