// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Site pages and their HTML rendering.
//!
//! Templates are embedded in the binary and rendered with `minijinja`,
//! which escapes every interpolated value in `.html` templates.

use minijinja::{Environment, Value, context};
use prana::{FormPhase, FormState, Notice};
use prana_api::FormKind;
use prana_domain::catalog::{
    CLASS_LEVELS, CONSULTATION_STEPS, FEATURED_SEMINARS, FESTIVAL_TOPICS, FIRST_TIMER_STEPS,
    HIGHLIGHTS, SEMINAR_OFFERINGS, SERVICES, TREATMENTS, YOGA_STYLES,
};
use prana_domain::{FieldSpec, FormSchema, InputKind};
use serde::Serialize;

/// Every embedded template, by name.
const TEMPLATES: &[(&str, &str)] = &[
    (
        "layout/base.html",
        include_str!("../templates/layout/base.html"),
    ),
    (
        "forms/booking.html",
        include_str!("../templates/forms/booking.html"),
    ),
    ("pages/home.html", include_str!("../templates/pages/home.html")),
    (
        "pages/classes.html",
        include_str!("../templates/pages/classes.html"),
    ),
    (
        "pages/treatments.html",
        include_str!("../templates/pages/treatments.html"),
    ),
    (
        "pages/consultations.html",
        include_str!("../templates/pages/consultations.html"),
    ),
    (
        "pages/seminars.html",
        include_str!("../templates/pages/seminars.html"),
    ),
    (
        "pages/book_session.html",
        include_str!("../templates/pages/book_session.html"),
    ),
    ("errors/404.html", include_str!("../templates/errors/404.html")),
];

/// A header navigation entry.
#[derive(Debug, Clone, Copy, Serialize)]
struct NavLink {
    label: &'static str,
    path: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        path: "/",
    },
    NavLink {
        label: "Yoga Classes",
        path: "/classes",
    },
    NavLink {
        label: "Treatments",
        path: "/treatments",
    },
    NavLink {
        label: "Consultations",
        path: "/consultations",
    },
    NavLink {
        label: "Seminars",
        path: "/seminars",
    },
];

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    Home,
    /// Yoga styles, class schedule and class booking.
    Classes,
    /// Therapeutic treatment programs.
    Treatments,
    /// The consultation process.
    Consultations,
    /// Corporate seminars and seminar inquiry.
    Seminars,
    /// Private session booking.
    BookSession,
    /// Unknown path.
    NotFound,
}

impl Page {
    /// Every routable page.
    pub const ROUTABLE: [Self; 6] = [
        Self::Home,
        Self::Classes,
        Self::Treatments,
        Self::Consultations,
        Self::Seminars,
        Self::BookSession,
    ];

    /// Looks up the page served at `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ROUTABLE.into_iter().find(|page| page.path() == path)
    }

    /// Returns the path the page is served at.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Classes => "/classes",
            Self::Treatments => "/treatments",
            Self::Consultations => "/consultations",
            Self::Seminars => "/seminars",
            Self::BookSession => "/book-session",
            Self::NotFound => "",
        }
    }

    /// Returns the page title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Yoga and Holistic Wellness",
            Self::Classes => "Yoga Classes",
            Self::Treatments => "Holistic Treatments",
            Self::Consultations => "Consultations",
            Self::Seminars => "Corporate Seminars",
            Self::BookSession => "Book a Session",
            Self::NotFound => "Page Not Found",
        }
    }

    /// Returns the booking form hosted by the page, if any.
    #[must_use]
    pub const fn form(&self) -> Option<FormKind> {
        match self {
            Self::Classes => Some(FormKind::ClassBooking),
            Self::Seminars => Some(FormKind::SeminarInquiry),
            Self::BookSession => Some(FormKind::SessionBooking),
            Self::Home | Self::Treatments | Self::Consultations | Self::NotFound => None,
        }
    }

    const fn template(&self) -> &'static str {
        match self {
            Self::Home => "pages/home.html",
            Self::Classes => "pages/classes.html",
            Self::Treatments => "pages/treatments.html",
            Self::Consultations => "pages/consultations.html",
            Self::Seminars => "pages/seminars.html",
            Self::BookSession => "pages/book_session.html",
            Self::NotFound => "errors/404.html",
        }
    }

    /// Static catalog content rendered by the page.
    fn content(&self) -> Value {
        match self {
            Self::Home => context! {
                services => SERVICES,
                highlights => HIGHLIGHTS,
                featured_seminars => FEATURED_SEMINARS,
            },
            Self::Classes => context! {
                yoga_styles => YOGA_STYLES,
                class_levels => CLASS_LEVELS,
                first_timer_steps => FIRST_TIMER_STEPS,
            },
            Self::Treatments => context! { treatments => TREATMENTS },
            Self::Consultations => context! { consultation_steps => CONSULTATION_STEPS },
            Self::Seminars => context! {
                seminar_offerings => SEMINAR_OFFERINGS,
                festival_topics => FESTIVAL_TOPICS,
            },
            Self::BookSession | Self::NotFound => context! {},
        }
    }
}

#[derive(Debug, Serialize)]
struct OptionView {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct FieldView {
    name: &'static str,
    label: &'static str,
    input: &'static str,
    placeholder: &'static str,
    required: bool,
    value: String,
    error: Option<String>,
    options: Vec<OptionView>,
}

impl FieldView {
    fn new(spec: &FieldSpec, state: &FormState) -> Self {
        let value: String = state.values.get(spec.name).unwrap_or_default().to_string();
        let options: Vec<OptionView> = spec
            .options()
            .iter()
            .map(|option| OptionView {
                value: option.value,
                label: option.label,
                selected: option.value == value,
            })
            .collect();

        Self {
            name: spec.name,
            label: spec.label,
            input: input_type(spec.input),
            placeholder: spec.placeholder,
            required: spec.required,
            value,
            error: state
                .errors
                .get(spec.name)
                .map(|error| error.message.clone()),
            options,
        }
    }
}

const fn input_type(input: InputKind) -> &'static str {
    match input {
        InputKind::Text => "text",
        InputKind::Tel => "tel",
        InputKind::Email => "email",
        InputKind::Select => "select",
        InputKind::Date => "date",
        InputKind::Number => "number",
        InputKind::TextArea => "textarea",
    }
}

/// What the form partial renders: the editable form or its confirmation.
#[derive(Debug, Serialize)]
struct FormView {
    id: &'static str,
    title: &'static str,
    submit_label: &'static str,
    action: &'static str,
    reset_action: String,
    submitted: bool,
    heading: &'static str,
    body: &'static str,
    reset_label: &'static str,
    fields: Vec<FieldView>,
}

impl FormView {
    fn new(kind: FormKind, state: &FormState) -> Self {
        let schema: &'static FormSchema = kind.schema();
        Self {
            id: schema.id,
            title: schema.title,
            submit_label: schema.submit_label,
            action: kind.page_path(),
            reset_action: format!("{}/reset", kind.page_path()),
            submitted: state.phase == FormPhase::Submitted,
            heading: schema.confirmation.heading,
            body: schema.confirmation.body,
            reset_label: schema.confirmation.reset_label,
            fields: schema
                .fields
                .iter()
                .map(|spec| FieldView::new(spec, state))
                .collect(),
        }
    }
}

/// The site's compiled templates.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compiles every embedded template.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env: Environment<'static> = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a page.
    ///
    /// `form_state` is the state of the page's booking form, if it hosts
    /// one; `toast` is a notice to show above the content.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_page(
        &self,
        page: Page,
        form_state: &FormState,
        toast: Option<&Notice>,
    ) -> Result<String, minijinja::Error> {
        let form: Option<FormView> = page.form().map(|kind| FormView::new(kind, form_state));
        let ctx: Value = context! {
            page_title => page.title(),
            current_path => page.path(),
            nav => NAV_LINKS,
            content => page.content(),
            form => form,
            toast => toast,
        };
        self.env.get_template(page.template())?.render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prana_domain::{FieldErrors, ValidationError, ValidationErrorKind};

    fn templates() -> Templates {
        Templates::new().expect("templates compile")
    }

    #[test]
    fn test_every_routable_page_renders() {
        let templates = templates();
        for page in Page::ROUTABLE {
            let html = templates
                .render_page(page, &FormState::new(), None)
                .unwrap_or_else(|e| panic!("{page:?}: {e}"));
            assert!(html.contains(page.title()), "{page:?}");
        }
    }

    #[test]
    fn test_not_found_page_renders() {
        let html = templates()
            .render_page(Page::NotFound, &FormState::new(), None)
            .unwrap();
        assert!(html.contains("Page Not Found"));
    }

    #[test]
    fn test_page_lookup_by_path() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("/book-session"), Some(Page::BookSession));
        assert_eq!(Page::from_path("/retreats"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn test_form_renders_values_and_errors() {
        let mut state = FormState::new();
        state.values.set("full_name", String::from("A"));
        let mut errors = FieldErrors::new();
        errors.insert(
            "full_name",
            ValidationError::new(
                ValidationErrorKind::TooShort,
                "Name must be at least 2 characters.",
            ),
        );
        state.errors = errors;

        let html = templates()
            .render_page(Page::BookSession, &state, None)
            .unwrap();

        assert!(html.contains("value=\"A\""));
        assert!(html.contains("Name must be at least 2 characters."));
        assert!(html.contains("Submit Request"));
    }

    #[test]
    fn test_submitted_form_renders_confirmation() {
        let mut state = FormState::new();
        state.phase = FormPhase::Submitted;
        let toast = Notice::new("Inquiry Received", "We'll be in touch.");

        let html = templates()
            .render_page(Page::Seminars, &state, Some(&toast))
            .unwrap();

        assert!(html.contains("Thank You!"));
        assert!(html.contains("Submit Another Inquiry"));
        assert!(html.contains(FormKind::SeminarInquiry.id()));
        assert!(html.contains("Inquiry Received"));
        assert!(!html.contains("Submit Inquiry</button>"));
    }

    #[test]
    fn test_entered_values_are_escaped() {
        let mut state = FormState::new();
        state
            .values
            .set("full_name", String::from("<script>alert(1)</script>"));

        let html = templates()
            .render_page(Page::Classes, &state, None)
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
