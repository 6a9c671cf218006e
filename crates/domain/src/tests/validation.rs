// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::SESSION_TYPES;
use crate::{
    CATEGORY, CONTACT_EMAIL, CONTACT_PHONE, FULL_NAME, FieldErrors, FieldRule, FieldSpec,
    FormValues, NOTE, PREFERRED_DATE, ValidationError, ValidationErrorKind, check_field,
    is_valid_email, parse_calendar_date, parse_count, validate_values,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(FULL_NAME, "Full Name", FieldRule::Text { min_len: 2 })
        .required()
        .message("Name must be at least 2 characters."),
    FieldSpec::new(CONTACT_PHONE, "Mobile Number", FieldRule::Text { min_len: 10 })
        .required()
        .message("Please enter a valid mobile number."),
    FieldSpec::new(CONTACT_EMAIL, "Email", FieldRule::Email)
        .message("Please enter a valid email address."),
    FieldSpec::new(CATEGORY, "Session Type", FieldRule::Choice(SESSION_TYPES))
        .required()
        .message("Please select a session type."),
    FieldSpec::new(PREFERRED_DATE, "Preferred Date", FieldRule::Date)
        .required()
        .message("Please select a valid date"),
    FieldSpec::new(NOTE, "Message", FieldRule::FreeText),
];

fn spec(name: &str) -> &'static FieldSpec {
    FIELDS.iter().find(|spec| spec.name == name).unwrap()
}

fn values(pairs: &[(&'static str, &str)]) -> FormValues {
    let mut values: FormValues = FormValues::new();
    for (name, value) in pairs {
        values.set(*name, (*value).to_string());
    }
    values
}

fn valid_values() -> FormValues {
    values(&[
        (FULL_NAME, "Alex Rivers"),
        (CONTACT_PHONE, "5551234567"),
        (CONTACT_EMAIL, "alex@example.com"),
        (CATEGORY, "yoga-private"),
        (PREFERRED_DATE, "2026-04-01"),
    ])
}

#[test]
fn test_valid_values_produce_no_errors() {
    let errors: FieldErrors = validate_values(FIELDS, &valid_values());
    assert!(errors.is_empty());
}

#[test]
fn test_empty_required_name_is_missing() {
    let result: Result<(), ValidationError> = check_field(spec(FULL_NAME), Some(""));
    let err: ValidationError = result.unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::MissingRequired);
    assert_eq!(err.message, "Name must be at least 2 characters.");
}

#[test]
fn test_absent_required_name_is_missing() {
    let result: Result<(), ValidationError> = check_field(spec(FULL_NAME), None);
    assert_eq!(
        result.unwrap_err().kind,
        ValidationErrorKind::MissingRequired
    );
}

#[test]
fn test_whitespace_only_name_is_missing() {
    let result: Result<(), ValidationError> = check_field(spec(FULL_NAME), Some("   "));
    assert_eq!(
        result.unwrap_err().kind,
        ValidationErrorKind::MissingRequired
    );
}

#[test]
fn test_one_character_name_is_too_short() {
    let result: Result<(), ValidationError> = check_field(spec(FULL_NAME), Some("A"));
    assert_eq!(result.unwrap_err().kind, ValidationErrorKind::TooShort);
}

#[test]
fn test_two_character_name_is_accepted() {
    assert!(check_field(spec(FULL_NAME), Some("Al")).is_ok());
}

#[test]
fn test_name_length_counts_characters_not_bytes() {
    // Two characters, four bytes.
    assert!(check_field(spec(FULL_NAME), Some("Łó")).is_ok());
    assert_eq!(
        check_field(spec(FULL_NAME), Some("Ł")).unwrap_err().kind,
        ValidationErrorKind::TooShort
    );
}

#[test]
fn test_short_phone_is_too_short() {
    let err: ValidationError = check_field(spec(CONTACT_PHONE), Some("12345")).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::TooShort);
    assert_eq!(err.message, "Please enter a valid mobile number.");
}

#[test]
fn test_phone_has_no_format_check_beyond_length() {
    assert!(check_field(spec(CONTACT_PHONE), Some("(555) 123-4567")).is_ok());
    assert!(check_field(spec(CONTACT_PHONE), Some("abcdefghij")).is_ok());
}

#[test]
fn test_empty_email_is_exempt() {
    assert!(check_field(spec(CONTACT_EMAIL), Some("")).is_ok());
    assert!(check_field(spec(CONTACT_EMAIL), None).is_ok());
}

#[test]
fn test_malformed_email_is_invalid_format() {
    for bad in ["alex", "alex@", "@example.com", "alex@example", "alex @example.com"] {
        let err: ValidationError = check_field(spec(CONTACT_EMAIL), Some(bad)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidFormat, "{bad}");
    }
}

#[test]
fn test_whitespace_only_email_is_invalid_format() {
    for blank in [" ", "\t", "   "] {
        let err: ValidationError = check_field(spec(CONTACT_EMAIL), Some(blank)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidFormat, "{blank:?}");
    }
}

#[test]
fn test_whitespace_only_note_is_accepted() {
    assert!(check_field(spec(NOTE), Some("  ")).is_ok());
}

#[test]
fn test_email_pattern() {
    assert!(is_valid_email("alex@example.com"));
    assert!(is_valid_email("first.last+yoga@mail.example.co"));
    assert!(!is_valid_email("alex@example.c"));
    assert!(!is_valid_email("alex@@example.com"));
}

#[test]
fn test_unknown_category_is_invalid_format() {
    let err: ValidationError = check_field(spec(CATEGORY), Some("hot-yoga")).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::InvalidFormat);
    assert_eq!(err.message, "Please select a session type.");
}

#[test]
fn test_missing_category_is_missing_required() {
    let err: ValidationError = check_field(spec(CATEGORY), None).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::MissingRequired);
}

#[test]
fn test_unparseable_date_is_invalid_format() {
    for bad in ["tomorrow", "2026-02-30", "2026-13-01", "01/04/2026"] {
        let err: ValidationError = check_field(spec(PREFERRED_DATE), Some(bad)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidFormat, "{bad}");
    }
}

#[test]
fn test_parse_calendar_date_accepts_iso_and_rfc3339() {
    let date = parse_calendar_date("2026-04-01").unwrap();
    assert_eq!(date, time::macros::date!(2026 - 04 - 01));

    let date = parse_calendar_date("2026-04-01T09:30:00Z").unwrap();
    assert_eq!(date, time::macros::date!(2026 - 04 - 01));
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("50").unwrap(), 50);
    assert!(parse_count("0").is_err());
    assert!(parse_count("-3").is_err());
    assert!(parse_count("2.5").is_err());
    assert!(parse_count("many").is_err());
}

#[test]
fn test_optional_note_is_unbounded() {
    let long_note: String = "namaste ".repeat(10_000);
    assert!(check_field(spec(NOTE), Some(&long_note)).is_ok());
}

#[test]
fn test_constraints_are_independent_per_field() {
    let input: FormValues = values(&[
        (FULL_NAME, "A"),
        (CONTACT_PHONE, "12345"),
        (CONTACT_EMAIL, ""),
        (CATEGORY, "consultation"),
        (PREFERRED_DATE, "2026-03-15"),
    ]);

    let errors: FieldErrors = validate_values(FIELDS, &input);

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.kind(FULL_NAME), Some(ValidationErrorKind::TooShort));
    assert_eq!(
        errors.kind(CONTACT_PHONE),
        Some(ValidationErrorKind::TooShort)
    );
    assert!(!errors.contains(CONTACT_EMAIL));
}

#[test]
fn test_two_character_name_with_short_phone_flags_only_phone() {
    let input: FormValues = values(&[
        (FULL_NAME, "Al"),
        (CONTACT_PHONE, "12345"),
        (CONTACT_EMAIL, ""),
        (CATEGORY, "consultation"),
        (PREFERRED_DATE, "2026-03-15"),
    ]);

    let errors: FieldErrors = validate_values(FIELDS, &input);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.kind(CONTACT_PHONE),
        Some(ValidationErrorKind::TooShort)
    );
}

#[test]
fn test_empty_form_flags_every_required_field() {
    let errors: FieldErrors = validate_values(FIELDS, &FormValues::new());

    assert_eq!(errors.len(), 4);
    for field in [FULL_NAME, CONTACT_PHONE, CATEGORY, PREFERRED_DATE] {
        assert_eq!(
            errors.kind(field),
            Some(ValidationErrorKind::MissingRequired),
            "{field}"
        );
    }
}

#[test]
fn test_validation_error_kind_display() {
    assert_eq!(
        format!("{}", ValidationErrorKind::MissingRequired),
        "MissingRequired"
    );
    assert_eq!(format!("{}", ValidationErrorKind::TooShort), "TooShort");
    assert_eq!(
        format!("{}", ValidationErrorKind::InvalidFormat),
        "InvalidFormat"
    );
}
