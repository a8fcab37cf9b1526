// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! User registration page: account form, divisions, and submit controls.

use eframe::egui;

use crate::logic::submission::{ensure_extension, suggested_file_name};
use crate::mvu::{AppModel, Msg};
use crate::ui::components::divisions::{self, DivisionsMsg};
use crate::ui::components::registration::{self, RegistrationMsg};

/// Render the registration page and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &AppModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.heading("Register user");
    ui.label(
        egui::RichText::new("Fields marked * are required.")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(8.0);

    let form_msgs = registration::view(ui, &model.registration);
    msgs.extend(form_msgs.into_iter().map(Msg::Registration));
    ui.add_space(12.0);

    let div_msgs = divisions::view(ui, &model.divisions);
    msgs.extend(div_msgs.into_iter().map(Msg::Divisions));
    ui.add_space(12.0);

    let issues = model.registration.errors().len();
    if issues > 0 {
        let color = ui.visuals().error_fg_color;
        ui.label(egui::RichText::new(format!("{issues} field(s) need attention.")).color(color));
    }

    ui.horizontal(|ui| {
        render_submit_button(ui, model, &mut msgs);
        if ui
            .button(format!("{} Reset", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE))
            .clicked()
        {
            msgs.push(Msg::Registration(RegistrationMsg::Reset));
            msgs.push(Msg::Divisions(DivisionsMsg::Clear));
        }
    });

    msgs
}

/// Validate first; only a valid form opens the save dialog.
fn render_submit_button(ui: &mut egui::Ui, model: &AppModel, msgs: &mut Vec<Msg>) {
    let button = egui::Button::new(format!(
        "{} Submit registration",
        egui_phosphor::regular::FLOPPY_DISK
    ));
    if !ui.add(button).clicked() {
        return;
    }

    if !model.registration.is_valid() {
        msgs.push(Msg::Registration(RegistrationMsg::ValidateAll));
        return;
    }

    let default_name = suggested_file_name(&model.registration.user().employee_code);
    let dialog = rfd::FileDialog::new()
        .set_title("Save registration")
        .add_filter("JSON", &["json"])
        .set_file_name(&default_name);

    match dialog.save_file() {
        Some(path) => msgs.push(Msg::SubmitRequested(ensure_extension(path, "json"))),
        None => msgs.push(Msg::SubmitCancelled),
    }
}
