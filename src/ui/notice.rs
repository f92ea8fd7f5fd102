use crate::errors::{Severity, ValidationError};

/// A validation message with a severity-derived title and color.
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn from_validation(err: &ValidationError) -> Self {
        Self {
            severity: err.severity(),
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Show the notice window. Returns `true` while it should stay open,
/// `false` once the user dismisses it.
pub fn show_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut open = true;
    let mut dismissed = false;

    egui::Window::new(&notice.title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match notice.severity {
                Severity::Error => {
                    ui.colored_label(egui::Color32::from_rgb(255, 80, 80), &notice.message);
                }
                Severity::Warning => {
                    ui.colored_label(egui::Color32::from_rgb(255, 200, 0), &notice.message);
                }
                Severity::Info => {
                    ui.label(&notice.message);
                }
            }

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui
                    .add(egui::Button::new("OK").min_size(egui::vec2(80.0, 28.0)))
                    .clicked()
                {
                    dismissed = true;
                }
            });
        });

    open && !dismissed
}
