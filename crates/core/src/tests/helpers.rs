// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Notice, NoticeChannel, SubmissionSink};
use prana_domain::{
    BookingRequest, CATEGORY, CONTACT_EMAIL, CONTACT_PHONE, ChoiceOption, ConfirmationText,
    FULL_NAME, FieldRule, FieldSpec, FormSchema, NOTE, NoticeText, PREFERRED_DATE,
};
use std::cell::RefCell;

const SESSION_TYPES: &[ChoiceOption] = &[
    ChoiceOption::new("consultation", "Initial Consultation"),
    ChoiceOption::new("yoga-private", "Private Yoga Session"),
];

pub static TEST_SCHEMA: FormSchema = FormSchema {
    id: "test-session",
    title: "Request a Session",
    submit_label: "Submit Request",
    fields: &[
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
    ],
    notice: NoticeText {
        title: "Request Received",
        description: "We'll contact you shortly to confirm.",
    },
    confirmation: ConfirmationText {
        heading: "Request Received!",
        body: "Thank you for booking with us.",
        reset_label: "Book Another Session",
    },
};

/// Notice channel that remembers everything published to it.
#[derive(Default)]
pub struct RecordingChannel {
    pub notices: RefCell<Vec<Notice>>,
}

impl NoticeChannel for RecordingChannel {
    fn publish(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Sink that remembers every accepted request.
#[derive(Default)]
pub struct RecordingSink {
    pub requests: RefCell<Vec<BookingRequest>>,
}

impl SubmissionSink for RecordingSink {
    fn record(&self, request: &BookingRequest) {
        self.requests.borrow_mut().push(request.clone());
    }
}

pub const VALID_INPUT: &[(&str, &str)] = &[
    (FULL_NAME, "Alex Rivers"),
    (CONTACT_PHONE, "5551234567"),
    (CONTACT_EMAIL, "alex@example.com"),
    (CATEGORY, "yoga-private"),
    (PREFERRED_DATE, "2026-04-01"),
];

pub const INVALID_INPUT: &[(&str, &str)] = &[
    (FULL_NAME, "A"),
    (CONTACT_PHONE, "12345"),
    (CONTACT_EMAIL, ""),
    (CATEGORY, "consultation"),
    (PREFERRED_DATE, "2026-03-15"),
];
