mod app;
mod errors;
mod state;
mod ui;

use app::GradeTrackerApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Student Grade Tracker")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([560.0, 420.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Student Grade Tracker",
        options,
        Box::new(|cc| Ok(Box::new(GradeTrackerApp::new(cc)))),
    )
}
