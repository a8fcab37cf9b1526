// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Landing page.

use eframe::egui;

use crate::mvu::{AppModel, Msg};
use crate::router::Route;

/// Render the landing page and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &AppModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.heading("Welcome");
    ui.add_space(4.0);
    ui.label("Register user accounts together with their division affiliations.");
    ui.add_space(12.0);

    if ui
        .add(egui::Button::new(format!(
            "{} Register a user",
            egui_phosphor::regular::USER_PLUS
        )))
        .clicked()
    {
        msgs.push(Msg::Navigate(Route::RegistUser));
    }

    if let Some(path) = &model.last_submission {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!("Last registration saved to {}", path.display()))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    }

    msgs
}
