// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring logging and egui/eframe to launch the StaffDesk UI.

use eframe::egui;
use egui_phosphor::Variant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::mvu::Msg;
use crate::router::Route;
use crate::ui::StaffDeskApp;

const APP_TITLE: &str = "StaffDesk";
const INNER_SIZE: [f32; 2] = [1024.0, 768.0];
const MIN_INNER_SIZE: [f32; 2] = [720.0, 480.0];
const DEFAULT_LOG_FILTER: &str = "staffdesk=info";

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// First message for the app, opening an optional path argument such as `/regist-user`.
///
/// An unknown path leaves the home page open and reports the path.
fn startup_message(arg: Option<String>) -> Msg {
    match arg {
        None => Msg::Navigate(Route::Home),
        Some(path) => Msg::OpenPath(path),
    }
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    init_logging();
    let start_path = std::env::args().nth(1);
    info!(start_path = start_path.as_deref().unwrap_or("/"), "starting {APP_TITLE}");
    let initial = startup_message(start_path);

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INNER_SIZE)
            .with_min_inner_size(MIN_INNER_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(StaffDeskApp::new(initial)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::mvu::{AppModel, update};

    fn open(arg: Option<&str>) -> AppModel {
        let mut model = AppModel::default();
        update(
            &mut model,
            startup_message(arg.map(str::to_string)),
            &mut Vec::new(),
        );
        model
    }

    #[test]
    fn no_start_path_opens_home() {
        assert!(matches!(startup_message(None), Msg::Navigate(Route::Home)));
        let model = open(None);
        assert_eq!(model.router.current(), Route::Home);
        assert!(model.error.is_none());
    }

    #[test]
    fn start_path_is_opened_by_path() {
        assert!(matches!(
            startup_message(Some("/regist-user".into())),
            Msg::OpenPath(ref p) if p == "/regist-user"
        ));
        assert_eq!(open(Some("/regist-user")).router.current(), Route::RegistUser);
    }

    #[test]
    fn unknown_start_path_stays_home_and_reports_it() {
        let model = open(Some("/missing"));
        assert_eq!(model.router.current(), Route::Home);
        assert_eq!(model.error.map(|e| e.title), Some("Page not found"));
    }
}
