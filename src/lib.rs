pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::SeedConfig;
pub use core::demo::{run_scenario, Scenario};
pub use domain::{Faculty, FacultyId, FieldOfStudy, Student, University, STUDENT_NOT_FOUND};
pub use utils::error::{RegistryError, Result};
