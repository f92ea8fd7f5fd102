use crate::state::app_state::AppState;

/// The scrollable report and message area filling the central panel.
pub fn show_display_panel(ui: &mut egui::Ui, state: &AppState) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Reports & Messages").strong());
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if state.display.is_empty() {
                        ui.label(
                            egui::RichText::new(
                                "Add a student to get started. Reports and feedback appear here.",
                            )
                            .weak(),
                        );
                    } else {
                        ui.monospace(&state.display);
                    }
                });
        });
}
