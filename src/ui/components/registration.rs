// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! User registration form with per-field validation feedback.

use std::collections::BTreeSet;

use eframe::egui;

use crate::models::user::{User, UserField, create_empty_user};
use crate::models::validation::{FieldErrors, validate_user, validate_user_field};
use crate::ui::components::date_field::{self, DateFieldModel, DateFieldMsg};

/// Form state: the record being edited plus the messages currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationModel {
    user: User,
    errors: FieldErrors,
    touched: BTreeSet<UserField>,
}

impl RegistrationModel {
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Message shown under `field`, if it has been touched and is invalid.
    pub fn error(&self, field: UserField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the whole record would pass validation right now.
    pub fn is_valid(&self) -> bool {
        validate_user(&self.user).is_empty()
    }

    fn revalidate(&mut self, field: UserField) {
        let message = validate_user_field(field, &self.user);
        self.errors.record(field, message);
    }
}

/// Messages produced by the registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationMsg {
    FieldChanged { field: UserField, value: String },
    FieldBlurred(UserField),
    ExpiredAt(DateFieldMsg),
    /// Validate every field and show all failures.
    ValidateAll,
    Reset,
}

/// Feedback surfaced to the status bar/modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the form model.
pub fn update(model: &mut RegistrationModel, msg: RegistrationMsg) -> Option<RegistrationEvent> {
    match msg {
        RegistrationMsg::FieldChanged { field, value } => {
            model.user.set(field, value);
            model.touched.insert(field);
            model.revalidate(field);
            // A changed password can make an already entered confirmation stale.
            if field == UserField::Password && model.touched.contains(&UserField::PasswordConfirm)
            {
                model.revalidate(UserField::PasswordConfirm);
            }
            None
        }
        RegistrationMsg::FieldBlurred(field) => {
            model.touched.insert(field);
            model.revalidate(field);
            None
        }
        RegistrationMsg::ExpiredAt(m) => {
            let iso = date_field::apply_to_iso(&model.user.expired_at, m).unwrap_or_default();
            update(
                model,
                RegistrationMsg::FieldChanged {
                    field: UserField::ExpiredAt,
                    value: iso,
                },
            )
        }
        RegistrationMsg::ValidateAll => {
            model.errors = validate_user(&model.user);
            model.touched.extend(UserField::ALL);
            match model.errors.first() {
                None => None,
                Some((field, message)) => Some(RegistrationEvent {
                    message: format!(
                        "Please fix {} field(s) before submitting.\n\n{}: {}",
                        model.errors.len(),
                        field.label(),
                        message
                    ),
                    is_error: true,
                }),
            }
        }
        RegistrationMsg::Reset => {
            *model = RegistrationModel {
                user: create_empty_user(),
                ..Default::default()
            };
            Some(RegistrationEvent {
                message: "Form cleared.".to_string(),
                is_error: false,
            })
        }
    }
}

/// Render the form fields and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &RegistrationModel) -> Vec<RegistrationMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("registration_grid")
            .num_columns(2)
            .spacing(egui::vec2(8.0, 10.0))
            .min_col_width(140.0)
            .show(ui, |ui| {
                for field in UserField::ALL {
                    ui.label(format!("{} *", field.label()));
                    ui.vertical(|ui| {
                        if field == UserField::ExpiredAt {
                            let picker = DateFieldModel::from_iso(&model.user.expired_at);
                            let dt_msgs = date_field::view(ui, "expired_at", &picker, false);
                            msgs.extend(dt_msgs.into_iter().map(RegistrationMsg::ExpiredAt));
                        } else {
                            render_text_input(ui, model, field, &mut msgs);
                        }
                        if let Some(err) = model.error(field) {
                            let color = ui.visuals().error_fg_color;
                            ui.label(egui::RichText::new(err).small().color(color));
                        }
                    });
                    ui.end_row();
                }
            });
    });

    msgs
}

fn render_text_input(
    ui: &mut egui::Ui,
    model: &RegistrationModel,
    field: UserField,
    msgs: &mut Vec<RegistrationMsg>,
) {
    let mut value = model.user.value(field).to_string();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut value)
            .id_salt(field.as_str())
            .password(field.is_secret())
            .hint_text(field_hint(field))
            .desired_width(280.0),
    );
    if resp.changed() {
        msgs.push(RegistrationMsg::FieldChanged { field, value });
    }
    if resp.lost_focus() {
        msgs.push(RegistrationMsg::FieldBlurred(field));
    }
}

fn field_hint(field: UserField) -> &'static str {
    match field {
        UserField::EmployeeCode => "6 characters, e.g. EMP001",
        UserField::EmployeeName => "Full name",
        UserField::Email => "name@example.com",
        UserField::Password => "At least 6 characters",
        UserField::PasswordConfirm => "Repeat password",
        UserField::ExpiredAt => "YYYY-MM-DD",
    }
}
