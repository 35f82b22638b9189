//! Parlor - a one-on-one chat demo client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for the roster fetch and reply timers
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use parlor_client::app::ParlorApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Parlor Chat",
        options,
        Box::new(|cc| Ok(Box::new(ParlorApp::new(cc)))),
    )
}
