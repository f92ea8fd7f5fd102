use crate::state::app_state::AppState;

/// Name and grade entry row.
pub fn show_input_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("Student Name:");
        ui.add(
            egui::TextEdit::singleline(&mut state.name_input)
                .desired_width(220.0)
                .hint_text("e.g. Alice Smith"),
        );

        ui.separator();

        ui.label("Grade (0-100):");
        ui.add(
            egui::TextEdit::singleline(&mut state.grade_input)
                .desired_width(90.0)
                .hint_text("e.g. 87.5"),
        );
    });
}
