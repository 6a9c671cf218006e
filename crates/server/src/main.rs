// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod notices;
mod pages;

use axum::{
    Form, Json, Router,
    extract::{Path, State as AxumState},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use clap::Parser;
use prana::{FormState, Notice};
use prana_api::{
    ApiError, ApiResult, FormDescription, FormKind, ListFormsResponse, SubmitBookingRequest,
    SubmitBookingResponse, TracingSink, ValidateFieldRequest, ValidateFieldResponse,
    describe_form, list_forms, submit_booking, validate_field,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info};

use crate::notices::{NoticeBroadcaster, Toaster, live_notices_handler};
use crate::pages::{Page, Templates};

/// Prana Studio - website and booking server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Holds no form state: every request builds its own form instance.
#[derive(Clone)]
struct AppState {
    /// The compiled page templates.
    templates: Arc<Templates>,
    /// The live notice stream.
    notices: NoticeBroadcaster,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::InvalidState { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
        }
    }
}

impl From<minijinja::Error> for HttpError {
    fn from(err: minijinja::Error) -> Self {
        error!(error = %err, "Template rendering failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Rendering error: {err}"),
        }
    }
}

/// Resolves the booking form page a request was addressed to.
fn form_page(path: &str) -> Result<(Page, FormKind), HttpError> {
    Page::from_path(path)
        .and_then(|page| page.form().map(|kind| (page, kind)))
        .ok_or_else(|| HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("No booking form at '{path}'"),
        })
}

/// Handler for GET on every site page.
async fn handle_get_page(
    AxumState(app_state): AxumState<AppState>,
    uri: Uri,
) -> Result<Response, HttpError> {
    let Some(page) = Page::from_path(uri.path()) else {
        return handle_not_found(AxumState(app_state)).await;
    };

    let html: String = app_state
        .templates
        .render_page(page, &FormState::new(), None)?;
    Ok(Html(html).into_response())
}

/// Handler for POST on a page hosting a booking form.
///
/// A rejected submission re-renders the page with the entered values and
/// per-field errors (422). An accepted one renders the confirmation and the
/// success toast (200).
async fn handle_submit_page(
    AxumState(app_state): AxumState<AppState>,
    uri: Uri,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Result<Response, HttpError> {
    let (page, kind) = form_page(uri.path())?;

    info!(form = %kind, "Handling booking form submission");

    let toaster: Toaster<'_> = Toaster::new(kind.id(), &app_state.notices);
    let request: SubmitBookingRequest = SubmitBookingRequest { fields };
    let result: ApiResult<SubmitBookingResponse> =
        submit_booking(kind, &request, &toaster, &TracingSink)?;

    let status: StatusCode = if result.response.is_submitted() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let toast: Option<Notice> = toaster.take();
    let html: String = app_state
        .templates
        .render_page(page, &result.new_state, toast.as_ref())?;

    Ok((status, Html(html)).into_response())
}

/// Handler for POST `{page}/reset`.
///
/// Forms live for one request only, so returning to an empty form is a
/// redirect to the page.
async fn handle_reset_page(uri: Uri) -> Result<Redirect, HttpError> {
    let path: &str = uri.path().strip_suffix("/reset").unwrap_or_default();
    let (page, kind) = form_page(path)?;

    info!(form = %kind, "Resetting booking form");

    Ok(Redirect::to(page.path()))
}

/// Fallback handler for unknown paths.
async fn handle_not_found(AxumState(app_state): AxumState<AppState>) -> Result<Response, HttpError> {
    let html: String = app_state
        .templates
        .render_page(Page::NotFound, &FormState::new(), None)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// Handler for GET `/api/forms` endpoint.
async fn handle_list_forms() -> Json<ListFormsResponse> {
    Json(list_forms())
}

/// Handler for GET `/api/forms/{form}` endpoint.
async fn handle_describe_form(Path(form): Path<String>) -> Result<Json<FormDescription>, HttpError> {
    let kind: FormKind = form.parse()?;
    Ok(Json(describe_form(kind)))
}

/// Handler for POST `/api/forms/{form}/validate` endpoint.
///
/// Checks a single field value.
async fn handle_validate_field(
    Path(form): Path<String>,
    Json(req): Json<ValidateFieldRequest>,
) -> Result<Json<ValidateFieldResponse>, HttpError> {
    let kind: FormKind = form.parse()?;
    Ok(Json(validate_field(kind, &req)?))
}

/// Handler for POST `/api/forms/{form}/submit` endpoint.
///
/// Submits a booking form. Rejections answer 422 with the per-field errors.
async fn handle_submit_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(form): Path<String>,
    Json(req): Json<SubmitBookingRequest>,
) -> Result<(StatusCode, Json<SubmitBookingResponse>), HttpError> {
    let kind: FormKind = form.parse()?;

    info!(
        form = %kind,
        fields = req.fields.len(),
        "Handling submit_booking request"
    );

    let toaster: Toaster<'_> = Toaster::new(kind.id(), &app_state.notices);
    let result: ApiResult<SubmitBookingResponse> =
        submit_booking(kind, &req, &toaster, &TracingSink)?;

    let status: StatusCode = if result.response.is_submitted() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((status, Json(result.response)))
}

fn build_router(app_state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();

    for page in Page::ROUTABLE {
        router = if page.form().is_some() {
            router
                .route(page.path(), get(handle_get_page).post(handle_submit_page))
                .route(&format!("{}/reset", page.path()), post(handle_reset_page))
        } else {
            router.route(page.path(), get(handle_get_page))
        };
    }

    router
        .route("/api/forms", get(handle_list_forms))
        .route("/api/forms/{form}", get(handle_describe_form))
        .route("/api/forms/{form}/validate", post(handle_validate_field))
        .route("/api/forms/{form}/submit", post(handle_submit_booking))
        .route("/notices/live", get(live_notices_handler))
        .fallback(handle_not_found)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Prana Studio server");

    let templates: Templates = Templates::new()?;
    let app_state: AppState = AppState {
        templates: Arc::new(templates),
        notices: NoticeBroadcaster::new(),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Run server
    axum::serve(listener, app).await?;

    Ok(())
}
