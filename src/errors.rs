use thiserror::Error;

/// Severity class of a validation notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A rejected user action. The `Display` string is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Student name cannot be empty.")]
    EmptyName,
    #[error("Student with this name already exists.")]
    DuplicateName,
    #[error("No students added yet.")]
    EmptyRoster,
    #[error("No students added yet. Please add a student first.")]
    EmptyRosterForGrades,
    #[error("Please enter student name to add grades.")]
    MissingNameForGrades,
    #[error("Please enter student name to view report.")]
    MissingNameForReport,
    #[error("Student '{0}' not found.")]
    StudentNotFound(String),
    #[error("Please enter a grade.")]
    EmptyGrade,
    #[error("Invalid grade. Please enter a number.")]
    InvalidGrade,
    #[error("Grade must be between 0 and 100.")]
    GradeOutOfRange,
}

impl ValidationError {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::EmptyRoster | ValidationError::EmptyRosterForGrades => Severity::Info,
            ValidationError::StudentNotFound(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Title of the notice window carrying this error.
    pub fn title(&self) -> &'static str {
        match self.severity() {
            Severity::Info => "Information",
            Severity::Warning => "Student Not Found",
            Severity::Error => "Input Error",
        }
    }
}
