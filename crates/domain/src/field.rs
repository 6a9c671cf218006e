// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// Visitor's full name.
pub const FULL_NAME: &str = "full_name";
/// Contact phone number.
pub const CONTACT_PHONE: &str = "contact_phone";
/// Contact email address.
pub const CONTACT_EMAIL: &str = "contact_email";
/// Instance-specific selection (session type, class, program).
pub const CATEGORY: &str = "category";
/// Preferred calendar date for the session.
pub const PREFERRED_DATE: &str = "preferred_date";
/// Free-form message from the visitor.
pub const NOTE: &str = "note";
/// Organization requesting a seminar.
pub const ORGANIZATION: &str = "organization";
/// Expected number of seminar attendees.
pub const ATTENDEES: &str = "attendees";
/// Seminar location.
pub const LOCATION: &str = "location";

/// One selectable value of a choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// The submitted value.
    pub value: &'static str,
    /// The human-readable label.
    pub label: &'static str,
}

impl ChoiceOption {
    /// Creates a new choice option.
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// The constraint applied to a present (non-empty) field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Text of at least `min_len` characters.
    Text {
        /// Minimum length in characters.
        min_len: usize,
    },
    /// An email address shaped `local@domain.tld`.
    Email,
    /// One of a fixed set of values.
    Choice(&'static [ChoiceOption]),
    /// A calendar date.
    Date,
    /// A whole number of at least one.
    Count,
    /// Unconstrained text.
    FreeText,
}

/// How a field is presented as an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single-line text input.
    Text,
    /// Telephone input.
    Tel,
    /// Email input.
    Email,
    /// Drop-down selector.
    Select,
    /// Date picker.
    Date,
    /// Numeric input.
    Number,
    /// Multi-line text area.
    TextArea,
}

impl InputKind {
    /// Returns the input kind naturally used for a rule.
    #[must_use]
    pub const fn for_rule(rule: &FieldRule) -> Self {
        match rule {
            FieldRule::Text { .. } => Self::Text,
            FieldRule::Email => Self::Email,
            FieldRule::Choice(_) => Self::Select,
            FieldRule::Date => Self::Date,
            FieldRule::Count => Self::Number,
            FieldRule::FreeText => Self::TextArea,
        }
    }
}

/// A single entry in a form's field table.
///
/// Built with `const` builder methods so that every form can be declared as
/// a `static` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name used in submissions.
    pub name: &'static str,
    /// The label shown next to the input.
    pub label: &'static str,
    /// The constraint applied when a value is present.
    pub rule: FieldRule,
    /// Whether an empty value is a violation.
    pub required: bool,
    /// The input control used to render this field.
    pub input: InputKind,
    /// Placeholder text for the input.
    pub placeholder: &'static str,
    /// Message shown when the rule fails.
    pub message: &'static str,
    /// Message shown when a required value is missing.
    /// Falls back to `message` when unset.
    pub missing_message: Option<&'static str>,
}

impl FieldSpec {
    /// Creates an optional field with the rule's default input kind.
    #[must_use]
    pub const fn new(name: &'static str, label: &'static str, rule: FieldRule) -> Self {
        Self {
            name,
            label,
            rule,
            required: false,
            input: InputKind::for_rule(&rule),
            placeholder: "",
            message: "Please enter a valid value.",
            missing_message: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Overrides the input kind.
    #[must_use]
    pub const fn input(mut self, input: InputKind) -> Self {
        self.input = input;
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets the message shown when the rule fails.
    #[must_use]
    pub const fn message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    /// Sets a distinct message for a missing required value.
    #[must_use]
    pub const fn missing_message(mut self, message: &'static str) -> Self {
        self.missing_message = Some(message);
        self
    }

    /// Returns the message for a missing required value.
    #[must_use]
    pub const fn missing_text(&self) -> &'static str {
        match self.missing_message {
            Some(message) => message,
            None => self.message,
        }
    }

    /// Returns the options of a choice field, or an empty slice.
    #[must_use]
    pub const fn options(&self) -> &'static [ChoiceOption] {
        match self.rule {
            FieldRule::Choice(options) => options,
            _ => &[],
        }
    }
}
