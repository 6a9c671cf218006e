// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborators a booking form hands its side effects to.

use prana_domain::{BookingRequest, NoticeText};
use serde::{Deserialize, Serialize};

/// A short-lived acknowledgment shown to the visitor outside the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Short title.
    pub title: String,
    /// One-sentence description.
    pub description: String,
}

impl Notice {
    /// Creates a new notice.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl From<NoticeText> for Notice {
    fn from(text: NoticeText) -> Self {
        Self::new(text.title, text.description)
    }
}

/// Receives transient notices.
///
/// Fire-and-forget: a form publishes at most one notice per accepted submit
/// and never learns whether it was displayed.
pub trait NoticeChannel {
    /// Publishes a notice.
    fn publish(&self, notice: Notice);
}

/// Receives accepted booking requests.
///
/// This is where a request would be forwarded to a booking backend. The
/// form trusts the sink and does not wait for, or react to, the outcome.
pub trait SubmissionSink {
    /// Records an accepted request.
    fn record(&self, request: &BookingRequest);
}
