// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::PathBuf;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::logic::submission::{RegistrationPayload, build_payload, write_payload};
use crate::router::{Route, Router};
use crate::ui::components::divisions::{self, DivisionsModel, DivisionsMsg};
use crate::ui::components::registration::{self, RegistrationModel, RegistrationMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Current page and navigation history.
    pub router: Router,
    /// Registration form state.
    pub registration: RegistrationModel,
    /// Division table state.
    pub divisions: DivisionsModel,
    /// Where the most recent registration was written.
    pub last_submission: Option<PathBuf>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error to display in modal.
    pub error: Option<ErrorNotice>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Error shown in the modal until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: &'static str,
    pub message: String,
}

/// Application messages routed through the update function.
pub enum Msg {
    Navigate(Route),
    NavigateBack,
    /// Navigate by URL-style path, e.g. `/regist-user`.
    OpenPath(String),
    Registration(RegistrationMsg),
    Divisions(DivisionsMsg),
    SubmitRequested(PathBuf),
    SubmitCancelled,
    SubmitCompleted(Result<PathBuf, String>),
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    WriteRegistration {
        output: PathBuf,
        payload: RegistrationPayload,
    },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Navigate(route) => navigate(model, route),
        Msg::NavigateBack => {
            let from = model.router.current();
            if model.router.back() {
                leave_page(model, from);
            }
        }
        Msg::OpenPath(path) => match Route::from_path(&path) {
            Some(route) => navigate(model, route),
            None => {
                warn!(%path, "no page registered for path");
                surface_event(model, format!("Page not found: {path}"), Some("Page not found"));
            }
        },
        Msg::DismissError => model.error = None,
        Msg::Registration(m) => {
            if let Some(event) = registration::update(&mut model.registration, m) {
                let title = event.is_error.then_some("Validation error");
                surface_event(model, event.message, title);
            }
        }
        Msg::Divisions(m) => {
            if let Some(event) = divisions::update(&mut model.divisions, m) {
                let title = event.is_error.then_some("Division error");
                surface_event(model, event.message, title);
            }
        }
        Msg::SubmitRequested(output) => match validate_for_submit(model, output) {
            Ok(cmd) => cmds.push(cmd),
            Err(err) => surface_event(model, err, Some("Validation error")),
        },
        Msg::SubmitCancelled => surface_event(model, "Submission cancelled.".to_string(), None),
        Msg::SubmitCompleted(result) => match result {
            Ok(path) => {
                reset_forms(model);
                surface_event(model, format!("Registration saved: {}", path.display()), None);
                model.last_submission = Some(path);
            }
            Err(err) => {
                warn!(error = %err, "registration could not be written");
                surface_event(
                    model,
                    format!("Failed to save registration:\n\n{err}"),
                    Some("Save failed"),
                );
            }
        },
    }
}

/// Execute a command synchronously and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::WriteRegistration { output, payload } => {
            debug!(path = %output.display(), "writing registration");
            let res = write_payload(&output, &payload)
                .map(|_| output)
                .map_err(|e| format!("{e:#}"));
            Msg::SubmitCompleted(res)
        }
    }
}

fn navigate(model: &mut AppModel, route: Route) {
    let from = model.router.current();
    if model.router.navigate(route) {
        info!(from = from.name(), to = route.name(), "navigated");
        leave_page(model, from);
    }
}

/// Form contents live only as long as the user stays on the registration page.
fn leave_page(model: &mut AppModel, from: Route) {
    if from == Route::RegistUser && model.router.current() != Route::RegistUser {
        reset_forms(model);
    }
}

fn reset_forms(model: &mut AppModel) {
    model.registration = RegistrationModel::default();
    model.divisions = DivisionsModel::default();
}

/// Update status/error fields consistently for user feedback.
/// A title marks the event as an error and names the modal.
fn surface_event(model: &mut AppModel, message: String, error_title: Option<&'static str>) {
    if let Some(title) = error_title {
        model.error = Some(ErrorNotice {
            title,
            message: message.clone(),
        });
    }
    model.status = Some(message);
}

/// Validate the form and build the write command for `output`.
fn validate_for_submit(model: &mut AppModel, output: PathBuf) -> Result<Command, String> {
    let payload = build_payload(
        model.registration.user(),
        model.divisions.rows(),
        OffsetDateTime::now_utc(),
    )
    .map_err(|errors| {
        debug!(invalid = errors.len(), "submission blocked by validation");
        // Show every failure on the form, then report the summary.
        registration::update(&mut model.registration, RegistrationMsg::ValidateAll)
            .map(|event| event.message)
            .unwrap_or_else(|| "Please fix the highlighted fields.".to_string())
    })?;

    info!(
        employee = %payload.user.employee_code,
        divisions = payload.divisions.len(),
        "registration submitted"
    );
    Ok(Command::WriteRegistration { output, payload })
}
