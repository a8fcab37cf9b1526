// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Date-only picker bound to ISO `YYYY-MM-DD` text, in MVU style.

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;

const ISO_DATE: &str = "%Y-%m-%d";

/// Picker state; `None` means no date chosen yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateFieldModel {
    pub date: Option<NaiveDate>,
}

impl DateFieldModel {
    /// Parse ISO text; blank or malformed text yields an empty picker.
    pub fn from_iso(text: &str) -> Self {
        Self {
            date: NaiveDate::parse_from_str(text.trim(), ISO_DATE).ok(),
        }
    }

    /// Selected date as ISO text, or `None` when empty.
    pub fn to_iso(&self) -> Option<String> {
        self.date.map(|d| d.format(ISO_DATE).to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateFieldMsg {
    /// A date was chosen in the calendar popup.
    Picked(NaiveDate),
    /// Clear the selection.
    Cleared,
    /// Set to the current local date.
    Today,
}

/// Apply a message to the picker model.
pub fn update(model: &mut DateFieldModel, msg: DateFieldMsg) {
    match msg {
        DateFieldMsg::Picked(date) => model.date = Some(date),
        DateFieldMsg::Cleared => model.date = None,
        DateFieldMsg::Today => model.date = Some(Local::now().date_naive()),
    }
}

/// Apply `msg` to the date held in `text` and return the resulting ISO text.
pub fn apply_to_iso(text: &str, msg: DateFieldMsg) -> Option<String> {
    let mut model = DateFieldModel::from_iso(text);
    update(&mut model, msg);
    model.to_iso()
}

/// Render the picker. `id_salt` must be unique among pickers on screen.
pub fn view(
    ui: &mut egui::Ui,
    id_salt: &str,
    model: &DateFieldModel,
    clearable: bool,
) -> Vec<DateFieldMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        let mut date = model.date.unwrap_or_else(|| Local::now().date_naive());
        if ui
            .add(
                DatePickerButton::new(&mut date)
                    .id_salt(id_salt)
                    .show_icon(true),
            )
            .changed()
        {
            msgs.push(DateFieldMsg::Picked(date));
        }

        if model.date.is_none() {
            ui.label(
                egui::RichText::new("not set")
                    .small()
                    .italics()
                    .color(egui::Color32::from_gray(120)),
            );
        } else if clearable
            && ui
                .small_button(egui_phosphor::regular::X)
                .on_hover_text("Clear date")
                .clicked()
        {
            msgs.push(DateFieldMsg::Cleared);
        }

        if ui
            .small_button(egui_phosphor::regular::CALENDAR_CHECK)
            .on_hover_text("Use today's date")
            .clicked()
        {
            msgs.push(DateFieldMsg::Today);
        }
    });

    msgs
}
