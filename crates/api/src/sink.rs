// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prana::SubmissionSink;
use prana_domain::BookingRequest;
use tracing::info;

/// Submission sink that records accepted requests as structured log events.
///
/// Nothing is stored. Forwarding to a booking backend would replace this
/// sink with one that performs the delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&self, request: &BookingRequest) {
        info!(
            form = request.form,
            full_name = %request.full_name,
            contact_phone = %request.contact_phone,
            contact_email = ?request.contact_email,
            category = ?request.category,
            preferred_date = ?request.preferred_date,
            organization = ?request.organization,
            attendees = ?request.attendees,
            location = ?request.location,
            note = ?request.note,
            "Booking request received"
        );
    }
}
