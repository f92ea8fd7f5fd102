use eframe::egui;
use crate::state::app_state::{AppState, VERSION};
use crate::state::theme::Theme;
use crate::ui::button_panel::{self, RosterAction};
use crate::ui::display_panel;
use crate::ui::input_panel;
use crate::ui::notice::{self, Notice};

/// The main Grade Tracker application.
pub struct GradeTrackerApp {
    pub state: AppState,
    /// Active validation notice. Inputs are disabled while one is shown.
    pub notice: Option<Notice>,
    /// Whether to show the About window (hidden menu).
    pub show_about: bool,
    /// Whether to show the Debug Info window (hidden menu).
    pub show_debug: bool,
}

impl GradeTrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        // --- Global UI style improvements ---
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        // Larger text across the board
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::proportional(12.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            egui::FontId::monospace(13.5),
        );

        // Larger buttons with more padding
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);

        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        Self {
            state,
            notice: None,
            show_about: false,
            show_debug: false,
        }
    }

    /// Run the state change for a button press; a validation failure
    /// becomes the active notice.
    fn handle_action(&mut self, action: RosterAction) {
        let result = match action {
            RosterAction::None => return,
            RosterAction::AddStudent => self.state.add_student(),
            RosterAction::AddGrade => self.state.add_grade(),
            RosterAction::ViewReport => self.state.view_student_report(),
            RosterAction::ViewAllSummary => self.state.view_all_summary(),
            RosterAction::ClearDisplay => {
                self.state.clear_display();
                Ok(())
            }
        };
        if let Err(err) = result {
            self.notice = Some(Notice::from_validation(&err));
        }
    }
}

impl eframe::App for GradeTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Theme can change at runtime; visuals are cheap to apply every frame.
        ctx.set_visuals(self.state.theme.visuals());

        // While a notice is up, the form is inert until it is dismissed.
        let input_enabled = self.notice.is_none();
        let mut action = RosterAction::None;

        // --- Header panel ---
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.visuals_mut().override_text_color = Some(ui.visuals().strong_text_color());
                let heading_response = ui.heading("Grade Tracker");
                ui.visuals_mut().override_text_color = None;
                heading_response.context_menu(|ui| {
                    if ui.button("About Grade Tracker").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                    if ui.button("Debug Info").clicked() {
                        self.show_debug = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.state.theme {
                        Theme::Dark => "Light Mode",
                        Theme::Light => "Dark Mode",
                    };
                    if ui.button(theme_label).clicked() {
                        self.state.theme = self.state.theme.toggle();
                    }

                    ui.separator();
                    ui.small(format!("v{VERSION}"));
                });
            });
        });

        // --- Input panel ---
        egui::TopBottomPanel::top("inputs")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                ui.add_enabled_ui(input_enabled, |ui| {
                    input_panel::show_input_panel(ui, &mut self.state);
                });
            });

        // --- Action button panel ---
        egui::TopBottomPanel::bottom("actions")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 6)))
            .show(ctx, |ui| {
                ui.add_enabled_ui(input_enabled, |ui| {
                    action = button_panel::show_button_panel(ui, self.state.roster.len());
                });
            });

        // --- Central display panel ---
        egui::CentralPanel::default().show(ctx, |ui| {
            display_panel::show_display_panel(ui, &self.state);
        });

        self.handle_action(action);

        // --- Active notice ---
        let mut dismiss_notice = false;
        if let Some(ref n) = self.notice {
            if !notice::show_notice(ctx, n) {
                dismiss_notice = true;
            }
        }
        if dismiss_notice {
            self.notice = None;
        }

        // --- About window (hidden menu) ---
        if self.show_about {
            egui::Window::new("About Grade Tracker")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.heading("Grade Tracker");
                    ui.label(format!("Version: {VERSION}"));
                    ui.add_space(4.0);
                    ui.label("A small desktop gradebook for one class roster.");
                    ui.add_space(10.0);
                    ui.label("Features:");
                    ui.label("  \u{2022} Case-insensitive student lookup");
                    ui.label("  \u{2022} Grades from 0 to 100");
                    ui.label("  \u{2022} Per-student grade reports");
                    ui.label("  \u{2022} Whole-roster summary");
                    ui.add_space(10.0);
                    ui.label("Right-click the title for this menu.");
                });
        }

        // --- Debug Info window (hidden menu) ---
        if self.show_debug {
            egui::Window::new("Debug Info")
                .open(&mut self.show_debug)
                .collapsible(false)
                .resizable(false)
                .default_width(300.0)
                .show(ctx, |ui| {
                    ui.label(format!("Students: {}", self.state.roster.len()));
                    let total_grades: usize = self
                        .state
                        .roster
                        .students()
                        .iter()
                        .map(|s| s.grades().len())
                        .sum();
                    ui.label(format!("Total Grades: {total_grades}"));
                    ui.label(format!("Theme: {}", self.state.theme.label()));
                });
        }
    }
}
