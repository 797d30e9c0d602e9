pub mod demo;
pub mod export;

pub use crate::domain::{Faculty, FacultyId, FieldOfStudy, Student, University};
pub use crate::utils::error::Result;
