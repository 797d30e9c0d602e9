use crate::domain::faculty::Faculty;
use crate::domain::model::{FieldOfStudy, Student};
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;

pub const STUDENT_NOT_FOUND: &str = "Student not found in any faculty.";

/// Handle to a faculty owned by a [`University`].
///
/// Faculties are never removed, so a handle stays valid for the lifetime
/// of the university that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FacultyId(usize);

impl FacultyId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for FacultyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "UniversityRecord")]
pub struct University {
    name: String,
    faculties: Vec<Faculty>,
}

#[derive(Debug, Deserialize)]
struct UniversityRecord {
    name: String,
    #[serde(default)]
    faculties: Vec<Faculty>,
}

/// Each faculty checks its own roster; ids must also be unique across faculties.
impl TryFrom<UniversityRecord> for University {
    type Error = RegistryError;

    fn try_from(record: UniversityRecord) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for faculty in &record.faculties {
                for entry in faculty.roster() {
                    if !seen.insert(entry.student.id()) {
                        return Err(RegistryError::DuplicateStudent {
                            faculty: faculty.name().to_string(),
                            id: entry.student.id().to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            name: record.name,
            faculties: record.faculties,
        })
    }
}

impl University {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faculties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create_faculty(&mut self, name: impl Into<String>, field: FieldOfStudy) -> FacultyId {
        let faculty = Faculty::new(name, field);
        tracing::debug!("Creating faculty {} ({})", faculty.name(), field);
        self.faculties.push(faculty);
        FacultyId(self.faculties.len() - 1)
    }

    /// First faculty whose name matches exactly.
    pub fn find_faculty(&self, name: &str) -> Option<FacultyId> {
        self.faculties
            .iter()
            .position(|faculty| faculty.name() == name)
            .map(FacultyId)
    }

    pub fn faculty(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculties.get(id.0)
    }

    pub fn faculty_mut(&mut self, id: FacultyId) -> Option<&mut Faculty> {
        self.faculties.get_mut(id.0)
    }

    fn require_mut(&mut self, id: FacultyId) -> Result<&mut Faculty> {
        self.faculties
            .get_mut(id.0)
            .ok_or(RegistryError::UnknownFacultyId { index: id.0 })
    }

    /// Enrolls into one faculty, rejecting ids known anywhere in the university.
    pub fn enroll_student(&mut self, faculty: FacultyId, student: Student) -> Result<()> {
        if let Some(existing) = self.find_student_faculty(student.id()) {
            tracing::warn!("Student {} is already registered in {}", student.id(), existing);
            return Err(RegistryError::DuplicateStudent {
                faculty: existing.to_string(),
                id: student.id().to_string(),
            });
        }
        self.require_mut(faculty)?.enroll_student(student)
    }

    pub fn graduate_student(&mut self, faculty: FacultyId, id: &str) -> Result<&Student> {
        self.require_mut(faculty)?.graduate_student(id)
    }

    pub fn find_student_faculty(&self, id: &str) -> Option<&str> {
        self.faculties
            .iter()
            .find(|faculty| faculty.has_student(id))
            .map(Faculty::name)
    }

    /// Like [`University::find_student_faculty`], with [`STUDENT_NOT_FOUND`] as fallback.
    pub fn describe_student_faculty(&self, id: &str) -> &str {
        self.find_student_faculty(id).unwrap_or(STUDENT_NOT_FOUND)
    }

    pub fn faculties(&self) -> impl Iterator<Item = &Faculty> + '_ {
        self.faculties.iter()
    }

    pub fn faculties_by_field(&self, field: FieldOfStudy) -> impl Iterator<Item = &Faculty> + '_ {
        self.faculties
            .iter()
            .filter(move |faculty| faculty.field() == field)
    }

    pub fn faculty_count(&self) -> usize {
        self.faculties.len()
    }

    pub fn display_faculties<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "University Faculties:")?;
        for faculty in self.faculties() {
            writeln!(out, " - {}", faculty.name())?;
        }
        Ok(())
    }

    pub fn display_faculties_by_field<W: Write>(
        &self,
        field: FieldOfStudy,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "Faculties in Field: {}:", field)?;
        for faculty in self.faculties_by_field(field) {
            writeln!(out, " - {}", faculty.name())?;
        }
        Ok(())
    }
}
