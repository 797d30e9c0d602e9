use crate::domain::{FieldOfStudy, Student, University};
use crate::utils::error::{RegistryError, Result};
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct FacultySeed {
    pub name: String,
    pub field: FieldOfStudy,
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graduation {
    pub faculty: String,
    pub id: String,
}

/// Everything one run needs: the data to load and what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub university: String,
    pub faculties: Vec<FacultySeed>,
    pub graduations: Vec<Graduation>,
    pub show_enrolled: Vec<String>,
    pub show_graduated: Vec<String>,
    pub lookup: Option<String>,
    pub field_filter: Option<FieldOfStudy>,
}

impl Scenario {
    pub fn demo() -> Self {
        Self {
            university: "TUM".to_string(),
            faculties: vec![
                FacultySeed {
                    name: "Food Technology".to_string(),
                    field: FieldOfStudy::FoodTechnology,
                    students: vec![Student::new("Charlie", "FT001", "charlie@tum.md")],
                },
                FacultySeed {
                    name: "Computer Science".to_string(),
                    field: FieldOfStudy::ComputerScience,
                    students: vec![
                        Student::new("Alice", "CS001", "alice@tum.md"),
                        Student::new("Bob", "CS002", "bob@tum.md"),
                    ],
                },
            ],
            graduations: vec![Graduation {
                faculty: "Computer Science".to_string(),
                id: "CS001".to_string(),
            }],
            show_enrolled: vec!["Computer Science".to_string(), "Food Technology".to_string()],
            show_graduated: vec!["Computer Science".to_string()],
            lookup: Some("CS002".to_string()),
            field_filter: None,
        }
    }

    pub fn with_field_filter(mut self, field: Option<FieldOfStudy>) -> Self {
        self.field_filter = field;
        self
    }

    /// Builds the university with every student enrolled, before any graduation.
    pub fn build_university(&self) -> University {
        let mut university = University::new(self.university.clone());

        let ids: Vec<_> = self
            .faculties
            .iter()
            .map(|seed| university.create_faculty(seed.name.clone(), seed.field))
            .collect();

        for (seed, faculty) in self.faculties.iter().zip(ids) {
            for student in &seed.students {
                if let Err(e) = university.enroll_student(faculty, student.clone()) {
                    tracing::warn!("Skipping {}: {}", student, e);
                }
            }
        }

        university
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::demo()
    }
}

/// Runs a scenario and writes its transcript to `out`.
pub fn run_scenario<W: Write>(scenario: &Scenario, out: &mut W) -> Result<University> {
    tracing::info!(
        "Running scenario for {} ({} faculties)",
        scenario.university,
        scenario.faculties.len()
    );
    let mut university = scenario.build_university();

    writeln!(out)?;
    writeln!(out, "Enrolled Students:")?;
    for name in &scenario.show_enrolled {
        match university.find_faculty(name).and_then(|id| university.faculty(id)) {
            Some(faculty) => faculty.display_enrolled_students(out)?,
            None => tracing::warn!("No faculty named {:?}, skipping enrolled listing", name),
        }
    }

    for graduation in &scenario.graduations {
        let Some(faculty) = university.find_faculty(&graduation.faculty) else {
            tracing::warn!(
                "No faculty named {:?}, cannot graduate {}",
                graduation.faculty,
                graduation.id
            );
            continue;
        };
        match university.graduate_student(faculty, &graduation.id) {
            Ok(_) => {}
            Err(e @ RegistryError::StudentNotEnrolled { .. }) => writeln!(out, "{}", e)?,
            Err(e) => return Err(e),
        }
    }

    writeln!(out)?;
    writeln!(out, "Graduated Students:")?;
    for name in &scenario.show_graduated {
        match university.find_faculty(name).and_then(|id| university.faculty(id)) {
            Some(faculty) => faculty.display_graduated_students(out)?,
            None => tracing::warn!("No faculty named {:?}, skipping graduated listing", name),
        }
    }

    if let Some(id) = &scenario.lookup {
        writeln!(out)?;
        writeln!(
            out,
            "Faculty of Student {}: {}",
            id,
            university.describe_student_faculty(id)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "All Faculties:")?;
    university.display_faculties(out)?;

    if let Some(field) = scenario.field_filter {
        writeln!(out)?;
        university.display_faculties_by_field(field, out)?;
    }

    tracing::info!("Scenario finished");
    Ok(university)
}
