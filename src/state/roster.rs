use crate::errors::ValidationError;

pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 100.0;

/// Parse and validate a grade typed into the grade field.
pub fn parse_grade(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyGrade);
    }
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::InvalidGrade)?;
    // "NaN" and "inf" parse as f64 but are not grades
    if !value.is_finite() {
        return Err(ValidationError::InvalidGrade);
    }
    if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
        return Err(ValidationError::GradeOutOfRange);
    }
    Ok(value)
}

/// A named student with an append-only list of grades.
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    grades: Vec<f64>,
}

impl Student {
    fn new(name: String) -> Self {
        Self {
            name,
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded grades in the order they were added.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Append a grade. Callers validate the value with `parse_grade` first.
    pub fn add_grade(&mut self, value: f64) {
        self.grades.push(value);
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    pub fn highest(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn lowest(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Format as a multi-line report string.
    pub fn report(&self) -> String {
        if self.grades.is_empty() {
            return format!("Student Name: {}\nNo grades recorded yet.\n", self.name);
        }
        let listed = self
            .grades
            .iter()
            .map(|g| format!("{g:.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Student Name: {}\nNumber of Grades: {}\nGrades: [{}]\nAverage Grade: {:.2}\nHighest Grade: {:.2}\nLowest Grade: {:.2}\n",
            self.name,
            self.grade_count(),
            listed,
            self.average(),
            self.highest(),
            self.lowest()
        )
    }
}

/// All students for the current session, in insertion order.
#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Add a student. The trimmed name must be non-empty and unique
    /// under case-insensitive comparison.
    pub fn add_student(&mut self, name: &str) -> Result<&Student, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.find_student(trimmed).is_some() {
            return Err(ValidationError::DuplicateName);
        }
        self.students.push(Student::new(trimmed.to_string()));
        Ok(self.students.last().unwrap())
    }

    pub fn find_student(&self, name: &str) -> Option<&Student> {
        let needle = name.trim().to_lowercase();
        self.students
            .iter()
            .find(|s| s.name.to_lowercase() == needle)
    }

    pub fn find_student_mut(&mut self, name: &str) -> Option<&mut Student> {
        let needle = name.trim().to_lowercase();
        self.students
            .iter_mut()
            .find(|s| s.name.to_lowercase() == needle)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_student_trims_and_stores_name() {
        let mut roster = Roster::new();
        let student = roster.add_student("  Alice  ").unwrap();
        assert_eq!(student.name(), "Alice");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_student_rejects_empty_and_whitespace_names() {
        let mut roster = Roster::new();
        assert_eq!(roster.add_student("").unwrap_err(), ValidationError::EmptyName);
        assert_eq!(
            roster.add_student("   ").unwrap_err(),
            ValidationError::EmptyName
        );
        assert!(roster.is_empty());
    }

    #[test]
    fn test_add_student_rejects_case_insensitive_duplicates() {
        let mut roster = Roster::new();
        roster.add_student("Alice").unwrap();
        assert_eq!(
            roster.add_student("alice").unwrap_err(),
            ValidationError::DuplicateName
        );
        assert_eq!(
            roster.add_student("  ALICE ").unwrap_err(),
            ValidationError::DuplicateName
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_find_student_matches_case_insensitively() {
        let mut roster = Roster::new();
        roster.add_student("Alice").unwrap();
        assert!(roster.find_student("ALICE").is_some());
        assert!(roster.find_student("  alice  ").is_some());
        assert!(roster.find_student("Bob").is_none());
    }

    #[test]
    fn test_students_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.add_student("Carol").unwrap();
        roster.add_student("Alice").unwrap();
        roster.add_student("Bob").unwrap();
        let names: Vec<&str> = roster.students().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_student_without_grades_reports_zero_stats() {
        let mut roster = Roster::new();
        let student = roster.add_student("Alice").unwrap();
        assert_eq!(student.grade_count(), 0);
        assert_eq!(student.average(), 0.0);
        assert_eq!(student.highest(), 0.0);
        assert_eq!(student.lowest(), 0.0);
    }

    #[test]
    fn test_stats_over_several_grades() {
        let mut roster = Roster::new();
        roster.add_student("Alice").unwrap();
        let student = roster.find_student_mut("Alice").unwrap();
        student.add_grade(70.0);
        student.add_grade(100.0);
        student.add_grade(85.0);
        assert_eq!(student.grade_count(), 3);
        assert_eq!(student.average(), 85.0);
        assert_eq!(student.highest(), 100.0);
        assert_eq!(student.lowest(), 70.0);
        assert_eq!(student.grades(), [70.0, 100.0, 85.0]);
    }

    #[test]
    fn test_report_without_grades() {
        let mut roster = Roster::new();
        let student = roster.add_student("Alice").unwrap();
        assert_eq!(
            student.report(),
            "Student Name: Alice\nNo grades recorded yet.\n"
        );
    }

    #[test]
    fn test_report_lists_grades_in_order_with_two_decimals() {
        let mut roster = Roster::new();
        roster.add_student("Alice").unwrap();
        let student = roster.find_student_mut("Alice").unwrap();
        student.add_grade(70.0);
        student.add_grade(100.0);
        student.add_grade(85.5);
        assert_eq!(
            student.report(),
            "Student Name: Alice\n\
             Number of Grades: 3\n\
             Grades: [70.00, 100.00, 85.50]\n\
             Average Grade: 85.17\n\
             Highest Grade: 100.00\n\
             Lowest Grade: 70.00\n"
        );
    }

    #[test]
    fn test_report_is_stable_across_calls() {
        let mut roster = Roster::new();
        roster.add_student("Alice").unwrap();
        let student = roster.find_student_mut("Alice").unwrap();
        student.add_grade(42.0);
        let first = student.report();
        assert_eq!(student.report(), first);
        assert_eq!(student.report(), first);
    }

    #[test]
    fn test_parse_grade_accepts_range_boundaries() {
        assert_eq!(parse_grade("0"), Ok(0.0));
        assert_eq!(parse_grade("100"), Ok(100.0));
        assert_eq!(parse_grade("  42.5  "), Ok(42.5));
    }

    #[test]
    fn test_parse_grade_rejects_blank_input() {
        assert_eq!(parse_grade(""), Err(ValidationError::EmptyGrade));
        assert_eq!(parse_grade("   "), Err(ValidationError::EmptyGrade));
    }

    #[test]
    fn test_parse_grade_rejects_non_numeric_input() {
        assert_eq!(parse_grade("abc"), Err(ValidationError::InvalidGrade));
        assert_eq!(parse_grade("12.3.4"), Err(ValidationError::InvalidGrade));
        assert_eq!(parse_grade("NaN"), Err(ValidationError::InvalidGrade));
        assert_eq!(parse_grade("inf"), Err(ValidationError::InvalidGrade));
    }

    #[test]
    fn test_parse_grade_rejects_values_outside_range() {
        assert_eq!(parse_grade("-0.01"), Err(ValidationError::GradeOutOfRange));
        assert_eq!(parse_grade("100.01"), Err(ValidationError::GradeOutOfRange));
        assert_eq!(parse_grade("150"), Err(ValidationError::GradeOutOfRange));
        assert_eq!(parse_grade("-5"), Err(ValidationError::GradeOutOfRange));
    }
}
