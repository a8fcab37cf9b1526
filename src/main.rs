mod app;
mod logic;
mod models;
mod mvu;
mod router;
mod ui;
mod utils;

fn main() -> eframe::Result<()> {
    app::run()
}
