use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Student not found in enrolled list.")]
    StudentNotEnrolled { faculty: String, id: String },

    #[error("Student {id} is already registered in {faculty}")]
    DuplicateStudent { faculty: String, id: String },

    #[error("No faculty with handle #{index}")]
    UnknownFacultyId { index: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RegistryError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RegistryError::ConfigValidationError { .. }
            | RegistryError::InvalidConfigValueError { .. } => 2,
            RegistryError::IoError(_) | RegistryError::CsvError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
