use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity record for one student. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    id: String,
    email: String,
}

impl Student {
    pub fn new(name: impl Into<String>, id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Roster line: `name (ID: id)`.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FieldOfStudy {
    FoodTechnology,
    ComputerScience,
    Engineering,
    Business,
}

impl FieldOfStudy {
    pub fn label(&self) -> &'static str {
        match self {
            FieldOfStudy::FoodTechnology => "Food Technology",
            FieldOfStudy::ComputerScience => "Computer Science",
            FieldOfStudy::Engineering => "Engineering",
            FieldOfStudy::Business => "Business",
        }
    }
}

impl fmt::Display for FieldOfStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Enrolled,
    Graduated,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Enrolled => "enrolled",
            StudentStatus::Graduated => "graduated",
        }
    }
}

/// One roster entry: the student plus where they stand in the faculty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student: Student,
    pub status: StudentStatus,
}

impl Enrollment {
    pub fn enrolled(student: Student) -> Self {
        Self {
            student,
            status: StudentStatus::Enrolled,
        }
    }

    pub fn is_enrolled(&self) -> bool {
        self.status == StudentStatus::Enrolled
    }

    pub fn is_graduated(&self) -> bool {
        self.status == StudentStatus::Graduated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_accessors_return_constructor_arguments() {
        let student = Student::new("Alice", "CS001", "alice@tum.md");
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.id(), "CS001");
        assert_eq!(student.email(), "alice@tum.md");
    }

    #[test]
    fn test_student_accepts_empty_fields() {
        let student = Student::new("", "", "");
        assert_eq!(student.name(), "");
        assert_eq!(student.id(), "");
        assert_eq!(student.email(), "");
    }

    #[test]
    fn test_student_display_is_roster_line() {
        let student = Student::new("Bob", "CS002", "bob@tum.md");
        assert_eq!(student.to_string(), "Bob (ID: CS002)");
    }

    #[test]
    fn test_field_of_study_labels_and_serde_names() {
        assert_eq!(FieldOfStudy::FoodTechnology.to_string(), "Food Technology");
        assert_eq!(FieldOfStudy::Business.label(), "Business");

        let json = serde_json::to_string(&FieldOfStudy::ComputerScience).unwrap();
        assert_eq!(json, "\"computer-science\"");

        let parsed: FieldOfStudy = serde_json::from_str("\"engineering\"").unwrap();
        assert_eq!(parsed, FieldOfStudy::Engineering);
    }

    #[test]
    fn test_new_enrollment_is_enrolled() {
        let entry = Enrollment::enrolled(Student::new("Charlie", "FT001", "charlie@tum.md"));
        assert!(entry.is_enrolled());
        assert!(!entry.is_graduated());
        assert_eq!(entry.status.as_str(), "enrolled");
    }
}
