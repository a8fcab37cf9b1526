// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell.
//! Handles layout, page routing, and dispatch of background commands.

pub mod components;
pub mod pages;

use eframe::egui;
use tracing::debug;

use crate::mvu::{self, AppModel, Command, Msg};
use crate::router::Route;

/// Stateful egui application hosting the registration pages.
pub struct StaffDeskApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl StaffDeskApp {
    /// Start worker threads and queue `initial` as the first message.
    pub fn new(initial: Msg) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(1, 2))
            .unwrap_or(1);
        for idx in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                debug!(worker = idx, "command worker started");
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        let mut app = Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        };
        app.inbox.push(initial);
        app
    }
}

impl Default for StaffDeskApp {
    fn default() -> Self {
        Self::new(Msg::Navigate(Route::Home))
    }
}

impl eframe::App for StaffDeskApp {
    /// Drives a single UI frame: drains worker results, applies queued messages to the
    /// MVU model, forwards new commands to the workers, then renders the navigation bar,
    /// error modal, status bar and the page for the current route.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Messages are applied in the order they were produced.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("StaffDesk");
                ui.separator();
                self.render_navigation(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(2.0);
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            let route = self.model.router.current();
            let mut scroll = egui::ScrollArea::vertical().id_salt(route.name());
            if self.model.router.take_scroll_to_top() {
                scroll = scroll.scroll_offset(egui::Vec2::ZERO);
            }

            scroll.show(ui, |ui| {
                let page_msgs = match route {
                    Route::Home => pages::home::view(ui, &self.model),
                    Route::RegistUser => pages::regist_user::view(ui, &self.model),
                };
                self.inbox.extend(page_msgs);
            });
        });
    }
}

impl StaffDeskApp {
    /// One selectable entry per route, plus a back button when history exists.
    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        let current = self.model.router.current();
        if ui
            .add_enabled(
                self.model.router.can_go_back(),
                egui::Button::new(egui_phosphor::regular::ARROW_LEFT),
            )
            .on_hover_text("Back")
            .clicked()
        {
            self.inbox.push(Msg::NavigateBack);
        }
        for route in Route::ALL {
            let button = egui::Button::new(route.title()).selected(current == route);
            if ui.add(button).on_hover_text(route.path()).clicked() {
                self.inbox.push(Msg::Navigate(route));
            }
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(notice) = self.model.error.clone() {
            egui::Window::new(notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(notice.message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}
