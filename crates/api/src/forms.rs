// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking forms offered on the site.
//!
//! Each form is a `static` [`FormSchema`]; [`FormKind`] names them for
//! routing and lookup.

use crate::error::ApiError;
use prana_domain::catalog::{CLASS_OPTIONS, SEMINAR_OPTIONS, SESSION_TYPES};
use prana_domain::{
    ATTENDEES, CATEGORY, CONTACT_EMAIL, CONTACT_PHONE, ConfirmationText, FULL_NAME, FieldRule,
    FieldSpec, FormSchema, InputKind, LOCATION, NOTE, NoticeText, ORGANIZATION, PREFERRED_DATE,
};
use std::str::FromStr;

const NAME_MESSAGE: &str = "Name must be at least 2 characters.";
const PHONE_MESSAGE: &str = "Please enter a valid mobile number.";
const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Private session booking on `/book-session`.
pub static SESSION_BOOKING: FormSchema = FormSchema {
    id: "session-booking",
    title: "Request a Session",
    submit_label: "Submit Request",
    fields: &[
        FieldSpec::new(FULL_NAME, "Full Name", FieldRule::Text { min_len: 2 })
            .required()
            .placeholder("John Doe")
            .message(NAME_MESSAGE),
        FieldSpec::new(CONTACT_PHONE, "Mobile Number", FieldRule::Text { min_len: 10 })
            .required()
            .input(InputKind::Tel)
            .placeholder("8895673459")
            .message(PHONE_MESSAGE),
        FieldSpec::new(CONTACT_EMAIL, "Email Address", FieldRule::Email)
            .placeholder("john@example.com")
            .message(EMAIL_MESSAGE),
        FieldSpec::new(CATEGORY, "Session Type", FieldRule::Choice(SESSION_TYPES))
            .required()
            .placeholder("Select type")
            .message("Please select a session type."),
        FieldSpec::new(PREFERRED_DATE, "Preferred Date", FieldRule::Date)
            .required()
            .message("Please select a valid date"),
        FieldSpec::new(NOTE, "Message", FieldRule::FreeText)
            .placeholder("Tell us about your goals or any specific requirements..."),
    ],
    notice: NoticeText {
        title: "Request Received",
        description: "We've received your booking request. We'll contact you shortly to confirm.",
    },
    confirmation: ConfirmationText {
        heading: "Request Received!",
        body: "Thank you for booking with us. We'll review your request and contact you shortly to confirm your session.",
        reset_label: "Book Another Session",
    },
};

/// Group class booking on `/classes`.
pub static CLASS_BOOKING: FormSchema = FormSchema {
    id: "class-booking",
    title: "Book a Class",
    submit_label: "Book Class",
    fields: &[
        FieldSpec::new(FULL_NAME, "Full Name", FieldRule::Text { min_len: 2 })
            .required()
            .placeholder("John Doe")
            .message(NAME_MESSAGE),
        FieldSpec::new(CONTACT_PHONE, "Mobile Number", FieldRule::Text { min_len: 10 })
            .required()
            .input(InputKind::Tel)
            .placeholder("8895673459")
            .message(PHONE_MESSAGE),
        FieldSpec::new(CONTACT_EMAIL, "Email Address", FieldRule::Email)
            .placeholder("john@example.com")
            .message(EMAIL_MESSAGE),
        FieldSpec::new(CATEGORY, "Class", FieldRule::Choice(CLASS_OPTIONS))
            .required()
            .placeholder("Select a class")
            .message("Please select a class."),
        FieldSpec::new(NOTE, "Message", FieldRule::FreeText)
            .placeholder("Injuries, experience, or anything we should know..."),
    ],
    notice: NoticeText {
        title: "Class Booking Received",
        description: "We've saved you a spot. We'll contact you shortly to confirm.",
    },
    confirmation: ConfirmationText {
        heading: "You're Booked!",
        body: "Thank you for joining a class. We'll confirm your spot shortly. Please arrive 10 minutes early.",
        reset_label: "Book Another Class",
    },
};

/// Corporate seminar and festival event inquiry on `/seminars`.
pub static SEMINAR_INQUIRY: FormSchema = FormSchema {
    id: "seminar-inquiry",
    title: "Request a Seminar",
    submit_label: "Submit Inquiry",
    fields: &[
        FieldSpec::new(FULL_NAME, "Your Name", FieldRule::Text { min_len: 2 })
            .required()
            .placeholder("John Smith")
            .message(NAME_MESSAGE),
        FieldSpec::new(ORGANIZATION, "Organization", FieldRule::Text { min_len: 2 })
            .required()
            .placeholder("Acme Corp")
            .message("Organization must be at least 2 characters."),
        FieldSpec::new(CONTACT_PHONE, "Phone", FieldRule::Text { min_len: 10 })
            .required()
            .input(InputKind::Tel)
            .placeholder("(555) 123-4567")
            .message(PHONE_MESSAGE),
        FieldSpec::new(CONTACT_EMAIL, "Email", FieldRule::Email)
            .placeholder("john@acme.com")
            .message(EMAIL_MESSAGE),
        FieldSpec::new(CATEGORY, "Program", FieldRule::Choice(SEMINAR_OPTIONS))
            .required()
            .placeholder("Select a program")
            .message("Please select a program."),
        FieldSpec::new(ATTENDEES, "Expected Attendees", FieldRule::Count)
            .placeholder("50")
            .message("Please enter a whole number of attendees."),
        FieldSpec::new(LOCATION, "Location", FieldRule::FreeText)
            .input(InputKind::Text)
            .placeholder("City, State"),
        FieldSpec::new(NOTE, "Tell Us About Your Needs", FieldRule::FreeText)
            .placeholder("Describe your event, goals, and any specific requirements..."),
    ],
    notice: NoticeText {
        title: "Inquiry Received",
        description: "We've received your inquiry and will be in touch within 24-48 hours.",
    },
    confirmation: ConfirmationText {
        heading: "Thank You!",
        body: "We've received your inquiry and will be in touch within 24-48 hours.",
        reset_label: "Submit Another Inquiry",
    },
};

/// Identifies one of the site's booking forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Private session booking.
    SessionBooking,
    /// Group class booking.
    ClassBooking,
    /// Seminar inquiry.
    SeminarInquiry,
}

impl FormKind {
    /// Every form, in navigation order.
    pub const ALL: [Self; 3] = [Self::ClassBooking, Self::SeminarInquiry, Self::SessionBooking];

    /// Returns the form's schema.
    #[must_use]
    pub const fn schema(&self) -> &'static FormSchema {
        match self {
            Self::SessionBooking => &SESSION_BOOKING,
            Self::ClassBooking => &CLASS_BOOKING,
            Self::SeminarInquiry => &SEMINAR_INQUIRY,
        }
    }

    /// Returns the form's stable identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.schema().id
    }

    /// Returns the path of the page hosting the form.
    #[must_use]
    pub const fn page_path(&self) -> &'static str {
        match self {
            Self::SessionBooking => "/book-session",
            Self::ClassBooking => "/classes",
            Self::SeminarInquiry => "/seminars",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for FormKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Form"),
                message: format!("No booking form with id '{s}'"),
            })
    }
}
