// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Editable table of division affiliations.

use eframe::egui;

use crate::models::division::{
    DivisionColumn, DivisionData, create_empty_division, generate_new_division_id,
    sample_division_data,
};
use crate::ui::components::date_field::{self, DateFieldModel, DateFieldMsg};

/// UI model for the division rows.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DivisionsModel {
    rows: Vec<DivisionData>,
}

impl DivisionsModel {
    pub fn rows(&self) -> &[DivisionData] {
        &self.rows
    }

    fn row_mut(&mut self, id: u32) -> Option<&mut DivisionData> {
        self.rows.iter_mut().find(|d| d.id == id)
    }
}

/// Messages emitted by the division table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DivisionsMsg {
    AddRow,
    RemoveRow(u32),
    Edit {
        id: u32,
        column: DivisionColumn,
        value: String,
    },
    StartDate {
        id: u32,
        msg: DateFieldMsg,
    },
    EndDate {
        id: u32,
        msg: DateFieldMsg,
    },
    SetMain {
        id: u32,
        is_main: bool,
    },
    LoadSample,
    Clear,
}

/// Feedback surfaced to the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionsEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(model: &mut DivisionsModel, msg: DivisionsMsg) -> Option<DivisionsEvent> {
    match msg {
        DivisionsMsg::AddRow => {
            let Some(id) = generate_new_division_id(&model.rows) else {
                return Some(DivisionsEvent {
                    message: "No division id left; remove a row before adding another".to_string(),
                    is_error: true,
                });
            };
            // The first affiliation defaults to being the main one.
            let mut row = create_empty_division(Some(id));
            row.is_main = model.rows.is_empty();
            model.rows.push(row);
            None
        }
        DivisionsMsg::RemoveRow(id) => {
            let before = model.rows.len();
            model.rows.retain(|d| d.id != id);
            (model.rows.len() != before).then(|| DivisionsEvent {
                message: "Division removed".to_string(),
                is_error: false,
            })
        }
        DivisionsMsg::Edit { id, column, value } => {
            if let Some(row) = model.row_mut(id) {
                row.set_column(column, value);
            }
            None
        }
        DivisionsMsg::StartDate { id, msg } => {
            if let Some(row) = model.row_mut(id) {
                row.start_date = date_field::apply_to_iso(&row.start_date, msg).unwrap_or_default();
            }
            None
        }
        DivisionsMsg::EndDate { id, msg } => {
            if let Some(row) = model.row_mut(id) {
                let current = row.end_date.as_deref().unwrap_or_default();
                row.end_date = date_field::apply_to_iso(current, msg);
            }
            None
        }
        DivisionsMsg::SetMain { id, is_main } => {
            if !model.rows.iter().any(|d| d.id == id) {
                return None;
            }
            for row in &mut model.rows {
                if row.id == id {
                    row.is_main = is_main;
                } else if is_main {
                    row.is_main = false;
                }
            }
            None
        }
        DivisionsMsg::LoadSample => {
            model.rows = sample_division_data();
            Some(DivisionsEvent {
                message: format!("Loaded {} sample division(s)", model.rows.len()),
                is_error: false,
            })
        }
        DivisionsMsg::Clear => {
            model.rows.clear();
            None
        }
    }
}

/// Render the table and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &DivisionsModel) -> Vec<DivisionsMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new("Divisions")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Add division", egui_phosphor::regular::PLUS))
                    .clicked()
                {
                    msgs.push(DivisionsMsg::AddRow);
                }
                if ui
                    .button(format!("{} Load sample", egui_phosphor::regular::DATABASE))
                    .on_hover_text("Replace the rows with demo data")
                    .clicked()
                {
                    msgs.push(DivisionsMsg::LoadSample);
                }
            });
            ui.add_space(8.0);
            render_rows(ui, model, &mut msgs);
        });

    msgs
}

fn render_rows(ui: &mut egui::Ui, model: &DivisionsModel, msgs: &mut Vec<DivisionsMsg>) {
    if model.rows.is_empty() {
        ui.label(
            egui::RichText::new("No divisions added yet.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }

    egui::Grid::new("divisions_grid")
        .num_columns(DivisionColumn::ALL.len() + 4)
        .striped(true)
        .spacing(egui::vec2(8.0, 6.0))
        .show(ui, |ui| {
            for column in DivisionColumn::ALL {
                ui.strong(column.label());
            }
            ui.strong("Start");
            ui.strong("End");
            ui.strong("Main");
            ui.label("");
            ui.end_row();

            for row in &model.rows {
                for column in DivisionColumn::ALL {
                    let mut value = row.column(column).to_string();
                    if ui
                        .add(egui::TextEdit::singleline(&mut value).desired_width(110.0))
                        .changed()
                    {
                        msgs.push(DivisionsMsg::Edit {
                            id: row.id,
                            column,
                            value,
                        });
                    }
                }

                let start = DateFieldModel::from_iso(&row.start_date);
                for msg in date_field::view(ui, &format!("division-start-{}", row.id), &start, false)
                {
                    msgs.push(DivisionsMsg::StartDate { id: row.id, msg });
                }

                let end = DateFieldModel::from_iso(row.end_date.as_deref().unwrap_or_default());
                for msg in date_field::view(ui, &format!("division-end-{}", row.id), &end, true) {
                    msgs.push(DivisionsMsg::EndDate { id: row.id, msg });
                }

                let mut is_main = row.is_main;
                if ui.checkbox(&mut is_main, "").changed() {
                    msgs.push(DivisionsMsg::SetMain {
                        id: row.id,
                        is_main,
                    });
                }

                if ui
                    .small_button(egui_phosphor::regular::TRASH)
                    .on_hover_text("Remove division")
                    .clicked()
                {
                    msgs.push(DivisionsMsg::RemoveRow(row.id));
                }
                ui.end_row();
            }
        });
}
