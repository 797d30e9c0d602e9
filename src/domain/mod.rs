// Domain layer: students, faculties and the university that owns them.

pub mod faculty;
pub mod model;
pub mod university;

pub use faculty::Faculty;
pub use model::{Enrollment, FieldOfStudy, Student, StudentStatus};
pub use university::{FacultyId, University, STUDENT_NOT_FOUND};
