use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate service id in catalog: {id}")]
    DuplicateServiceId { id: String },
}

impl CalcError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::IoError(_) => "Check that the catalog file exists and is readable",
            CalcError::TomlError(_) => "Check the catalog file for TOML syntax errors",
            CalcError::SerializationError(_) => "Try the text output format instead",
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => {
                "Fix the reported field in the catalog file and try again"
            }
            CalcError::DuplicateServiceId { .. } => "Give every [[services]] entry a unique id",
        }
    }

    /// Process exit code: 1 for bad configuration, 2 for I/O and output failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::IoError(_) | CalcError::SerializationError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
