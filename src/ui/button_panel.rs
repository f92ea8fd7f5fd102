/// Actions that the button row can request from the parent.
pub enum RosterAction {
    None,
    AddStudent,
    AddGrade,
    ViewReport,
    ViewAllSummary,
    ClearDisplay,
}

/// Helper to create an action button with consistent min size.
fn action_btn(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(egui::Button::new(label).min_size(egui::vec2(0.0, 26.0)))
}

/// Render the action button row. Returns the action the user clicked.
pub fn show_button_panel(ui: &mut egui::Ui, student_count: usize) -> RosterAction {
    let mut action = RosterAction::None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        if action_btn(ui, "Add Student")
            .on_hover_text("Add the student named in the name field")
            .clicked()
        {
            action = RosterAction::AddStudent;
        }
        if action_btn(ui, "Add Grade")
            .on_hover_text("Record the grade for the named student")
            .clicked()
        {
            action = RosterAction::AddGrade;
        }

        ui.separator();

        if action_btn(ui, "View Student Report")
            .on_hover_text("Show the named student's grade statistics")
            .clicked()
        {
            action = RosterAction::ViewReport;
        }
        if action_btn(ui, "View All Summary")
            .on_hover_text("Show a report for every student")
            .clicked()
        {
            action = RosterAction::ViewAllSummary;
        }

        ui.separator();

        if action_btn(ui, "Clear Display")
            .on_hover_text("Empty the display area")
            .clicked()
        {
            action = RosterAction::ClearDisplay;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if student_count == 1 {
                "1 student".to_string()
            } else {
                format!("{student_count} students")
            };
            ui.label(egui::RichText::new(label).weak());
        });
    });

    action
}
