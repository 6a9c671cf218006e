// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use prana::{Notice, NoticeChannel, SubmissionSink};
use prana_domain::BookingRequest;
use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::{FormKind, SubmitBookingRequest};

#[derive(Default)]
pub struct RecordingChannel {
    pub notices: RefCell<Vec<Notice>>,
}

impl NoticeChannel for RecordingChannel {
    fn publish(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub requests: RefCell<Vec<BookingRequest>>,
}

impl SubmissionSink for RecordingSink {
    fn record(&self, request: &BookingRequest) {
        self.requests.borrow_mut().push(request.clone());
    }
}

pub fn request_from(pairs: &[(&str, &str)]) -> SubmitBookingRequest {
    let fields: BTreeMap<String, String> = pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect();
    SubmitBookingRequest { fields }
}

/// Returns a complete, valid submission for the given form.
pub fn create_valid_request(kind: FormKind) -> SubmitBookingRequest {
    match kind {
        FormKind::SessionBooking => request_from(&[
            ("full_name", "Alex Rivers"),
            ("contact_phone", "5551234567"),
            ("contact_email", "alex@example.com"),
            ("category", "yoga-private"),
            ("preferred_date", "2026-04-01"),
        ]),
        FormKind::ClassBooking => request_from(&[
            ("full_name", "Priya Nair"),
            ("contact_phone", "8895673459"),
            ("contact_email", ""),
            ("category", "power-vinyasa"),
        ]),
        FormKind::SeminarInquiry => request_from(&[
            ("full_name", "John Smith"),
            ("organization", "Acme Corp"),
            ("contact_phone", "(555) 123-4567"),
            ("contact_email", "john@acme.com"),
            ("category", "desk-yoga"),
            ("attendees", "50"),
            ("location", "Austin, TX"),
        ]),
    }
}
