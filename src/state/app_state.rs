use crate::errors::ValidationError;
use crate::state::roster::{parse_grade, Roster};
use crate::state::theme::Theme;

pub const VERSION: &str = "0.1.0";

/// Everything the window reads and mutates: the roster, the two input
/// fields, the display buffer, and the theme.
#[derive(Debug, Clone)]
pub struct AppState {
    pub roster: Roster,
    pub name_input: String,
    pub grade_input: String,
    pub display: String,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            name_input: String::new(),
            grade_input: String::new(),
            display: String::new(),
            theme: Theme::default(),
        }
    }

    /// Add the student named in the name field, then clear that field.
    pub fn add_student(&mut self) -> Result<(), ValidationError> {
        let student = self.roster.add_student(&self.name_input)?;
        let line = format!("{} added successfully!\n", student.name());
        tracing::info!("Added student {:?}", student.name());
        self.display.push_str(&line);
        self.name_input.clear();
        Ok(())
    }

    /// Record the grade in the grade field for the student named in the
    /// name field, then clear the grade field only.
    pub fn add_grade(&mut self) -> Result<(), ValidationError> {
        if self.roster.is_empty() {
            return Err(ValidationError::EmptyRosterForGrades);
        }
        if self.name_input.trim().is_empty() {
            return Err(ValidationError::MissingNameForGrades);
        }
        let student = match self.roster.find_student_mut(&self.name_input) {
            Some(s) => s,
            None => {
                return Err(ValidationError::StudentNotFound(
                    self.name_input.trim().to_string(),
                ))
            }
        };
        let grade = parse_grade(&self.grade_input)?;
        student.add_grade(grade);
        // Feedback uses the stored name, not the typed lookup text
        let line = format!("Grade {grade:.2} added for {}.\n", student.name());
        tracing::info!("Recorded grade {:.2} for {:?}", grade, student.name());
        self.display.push_str(&line);
        self.grade_input.clear();
        Ok(())
    }

    /// Replace the display with the report of the student named in the
    /// name field.
    pub fn view_student_report(&mut self) -> Result<(), ValidationError> {
        if self.roster.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        if self.name_input.trim().is_empty() {
            return Err(ValidationError::MissingNameForReport);
        }
        let student = match self.roster.find_student(&self.name_input) {
            Some(s) => s,
            None => {
                return Err(ValidationError::StudentNotFound(
                    self.name_input.trim().to_string(),
                ))
            }
        };
        self.display = student.report();
        Ok(())
    }

    /// Replace the display with every student's report, in insertion order.
    pub fn view_all_summary(&mut self) -> Result<(), ValidationError> {
        if self.roster.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        let mut summary = String::from("\n--- All Students Summary ---\n");
        for student in self.roster.students() {
            summary.push_str(&student.report());
            summary.push_str("--------------------\n");
        }
        self.display = summary;
        Ok(())
    }

    pub fn clear_display(&mut self) {
        self.display.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
