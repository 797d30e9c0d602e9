use crate::domain::model::{Enrollment, FieldOfStudy, Student, StudentStatus};
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A faculty and its roster.
///
/// Enrolled students keep their enrollment order. A graduating student is
/// moved to the end of the roster, so graduated students come out in the
/// order they graduated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FacultyRecord")]
pub struct Faculty {
    name: String,
    field: FieldOfStudy,
    roster: Vec<Enrollment>,
}

/// Raw snapshot form; only ever turned into a [`Faculty`] through enrollment.
#[derive(Debug, Deserialize)]
struct FacultyRecord {
    name: String,
    field: FieldOfStudy,
    #[serde(default)]
    roster: Vec<Enrollment>,
}

impl TryFrom<FacultyRecord> for Faculty {
    type Error = RegistryError;

    fn try_from(record: FacultyRecord) -> Result<Self> {
        let mut faculty = Faculty::new(record.name, record.field);
        let mut graduated = Vec::new();

        for entry in record.roster {
            if entry.is_graduated() {
                graduated.push(entry.student.id().to_string());
            }
            faculty.enroll_student(entry.student)?;
        }
        // Graduated entries sit at the end of a roster in graduation order.
        for id in &graduated {
            faculty.graduate_student(id)?;
        }

        Ok(faculty)
    }
}

impl Faculty {
    pub fn new(name: impl Into<String>, field: FieldOfStudy) -> Self {
        Self {
            name: name.into(),
            field,
            roster: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self) -> FieldOfStudy {
        self.field
    }

    pub fn roster(&self) -> &[Enrollment] {
        &self.roster
    }

    pub fn enroll_student(&mut self, student: Student) -> Result<()> {
        if self.has_student(student.id()) {
            tracing::warn!(
                "Refusing duplicate enrollment of {} in {}",
                student.id(),
                self.name
            );
            return Err(RegistryError::DuplicateStudent {
                faculty: self.name.clone(),
                id: student.id().to_string(),
            });
        }

        tracing::debug!("Enrolling {} in {}", student, self.name);
        self.roster.push(Enrollment::enrolled(student));
        Ok(())
    }

    /// Moves the first enrolled student with `id` to graduated.
    pub fn graduate_student(&mut self, id: &str) -> Result<&Student> {
        let Some(pos) = self
            .roster
            .iter()
            .position(|entry| entry.is_enrolled() && entry.student.id() == id)
        else {
            tracing::warn!("Cannot graduate {}: not enrolled in {}", id, self.name);
            return Err(RegistryError::StudentNotEnrolled {
                faculty: self.name.clone(),
                id: id.to_string(),
            });
        };

        let mut entry = self.roster.remove(pos);
        entry.status = StudentStatus::Graduated;
        self.roster.push(entry);
        tracing::info!("Graduated {} from {}", id, self.name);

        let last = self.roster.len() - 1;
        Ok(&self.roster[last].student)
    }

    pub fn enrolled_students(&self) -> impl Iterator<Item = &Student> + Clone + '_ {
        self.roster
            .iter()
            .filter(|entry| entry.is_enrolled())
            .map(|entry| &entry.student)
    }

    pub fn graduated_students(&self) -> impl Iterator<Item = &Student> + Clone + '_ {
        self.roster
            .iter()
            .filter(|entry| entry.is_graduated())
            .map(|entry| &entry.student)
    }

    pub fn enrolled_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.enrolled_students().map(Student::to_string)
    }

    pub fn graduated_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.graduated_students().map(Student::to_string)
    }

    pub fn display_enrolled_students<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Enrolled Students in {}:", self.name)?;
        for line in self.enrolled_lines() {
            writeln!(out, " - {}", line)?;
        }
        Ok(())
    }

    pub fn display_graduated_students<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Graduated Students in {}:", self.name)?;
        for line in self.graduated_lines() {
            writeln!(out, " - {}", line)?;
        }
        Ok(())
    }

    pub fn has_student(&self, id: &str) -> bool {
        self.roster.iter().any(|entry| entry.student.id() == id)
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled_students().count()
    }

    pub fn graduated_count(&self) -> usize {
        self.graduated_students().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer_science() -> Faculty {
        let mut faculty = Faculty::new("Computer Science", FieldOfStudy::ComputerScience);
        faculty
            .enroll_student(Student::new("Alice", "CS001", "alice@tum.md"))
            .unwrap();
        faculty
            .enroll_student(Student::new("Bob", "CS002", "bob@tum.md"))
            .unwrap();
        faculty
    }

    fn ids<'a>(students: impl Iterator<Item = &'a Student>) -> Vec<&'a str> {
        students.map(Student::id).collect()
    }

    #[test]
    fn test_enroll_preserves_insertion_order() {
        let faculty = computer_science();
        assert_eq!(ids(faculty.enrolled_students()), vec!["CS001", "CS002"]);
        assert_eq!(faculty.graduated_count(), 0);
    }

    #[test]
    fn test_graduate_moves_student() {
        let mut faculty = computer_science();

        let graduated = faculty.graduate_student("CS001").unwrap();
        assert_eq!(graduated.name(), "Alice");

        assert_eq!(ids(faculty.enrolled_students()), vec!["CS002"]);
        assert_eq!(ids(faculty.graduated_students()), vec!["CS001"]);
        assert!(faculty.has_student("CS001"));
        assert_eq!(faculty.roster().len(), 2);
    }

    #[test]
    fn test_graduated_list_follows_graduation_order() {
        let mut faculty = computer_science();
        faculty.graduate_student("CS002").unwrap();
        faculty.graduate_student("CS001").unwrap();

        assert_eq!(ids(faculty.graduated_students()), vec!["CS002", "CS001"]);
        assert_eq!(faculty.enrolled_count(), 0);
    }

    #[test]
    fn test_graduate_unknown_id_leaves_state_unchanged() {
        let mut faculty = computer_science();
        let before = faculty.roster().to_vec();

        let err = faculty.graduate_student("XX999").unwrap_err();
        assert!(matches!(err, RegistryError::StudentNotEnrolled { .. }));
        assert_eq!(err.to_string(), "Student not found in enrolled list.");
        assert_eq!(faculty.roster(), before.as_slice());
    }

    #[test]
    fn test_graduate_twice_is_rejected() {
        let mut faculty = computer_science();
        faculty.graduate_student("CS001").unwrap();

        assert!(faculty.graduate_student("CS001").is_err());
        assert_eq!(faculty.graduated_count(), 1);
    }

    #[test]
    fn test_duplicate_enrollment_is_rejected() {
        let mut faculty = computer_science();
        let err = faculty
            .enroll_student(Student::new("Alice Again", "CS001", "other@tum.md"))
            .unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateStudent { .. }));
        assert_eq!(faculty.enrolled_count(), 2);
    }

    #[test]
    fn test_graduated_student_cannot_reenroll() {
        let mut faculty = computer_science();
        faculty.graduate_student("CS001").unwrap();

        let result = faculty.enroll_student(Student::new("Alice", "CS001", "alice@tum.md"));
        assert!(result.is_err());
        assert_eq!(ids(faculty.enrolled_students()), vec!["CS002"]);
    }

    #[test]
    fn test_has_student_checks_both_statuses() {
        let mut faculty = computer_science();
        faculty.graduate_student("CS002").unwrap();

        assert!(faculty.has_student("CS001"));
        assert!(faculty.has_student("CS002"));
        assert!(!faculty.has_student("FT001"));
    }

    #[test]
    fn test_lines_are_restartable() {
        let faculty = computer_science();
        let lines = faculty.enrolled_students();

        let first: Vec<_> = lines.clone().map(Student::to_string).collect();
        let second: Vec<_> = lines.map(Student::to_string).collect();
        assert_eq!(first, second);
        assert_eq!(
            faculty.enrolled_lines().collect::<Vec<_>>(),
            vec!["Alice (ID: CS001)", "Bob (ID: CS002)"]
        );
    }

    #[test]
    fn test_snapshot_rebuilds_roster_order() {
        let mut faculty = computer_science();
        faculty
            .enroll_student(Student::new("Carol", "CS003", "carol@tum.md"))
            .unwrap();
        faculty.graduate_student("CS002").unwrap();
        faculty.graduate_student("CS001").unwrap();

        let json = serde_json::to_string(&faculty).unwrap();
        let loaded: Faculty = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.roster(), faculty.roster());
        assert_eq!(ids(loaded.graduated_students()), vec!["CS002", "CS001"]);
    }

    #[test]
    fn test_snapshot_with_duplicate_id_is_rejected() {
        let json = r#"{
            "name": "Computer Science",
            "field": "computer-science",
            "roster": [
                {"student": {"name": "Alice", "id": "CS001", "email": "alice@tum.md"}, "status": "enrolled"},
                {"student": {"name": "Alice", "id": "CS001", "email": "alice@tum.md"}, "status": "graduated"}
            ]
        }"#;

        let err = serde_json::from_str::<Faculty>(json).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_display_writes_heading_and_lines() {
        let mut faculty = computer_science();
        faculty.graduate_student("CS001").unwrap();

        let mut out = Vec::new();
        faculty.display_enrolled_students(&mut out).unwrap();
        faculty.display_graduated_students(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enrolled Students in Computer Science:\n - Bob (ID: CS002)\n\
             Graduated Students in Computer Science:\n - Alice (ID: CS001)\n"
        );
    }
}
