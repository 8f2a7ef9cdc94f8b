use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Container element not found: #{id}")]
    ContainerNotFound { id: String },

    #[error("Malformed document: {message}")]
    MalformedDocument { message: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScaffoldError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScaffoldError::ContainerNotFound { .. } => {
                "Add an element with the expected id to the page, or pass --container"
            }
            ScaffoldError::MalformedDocument { .. } => {
                "Check that the container element has a matching closing tag"
            }
            ScaffoldError::InvalidDate { .. } => {
                "Use an RFC 3339 timestamp (2024-01-31T12:00:00Z) or a YYYY-MM-DD date"
            }
            ScaffoldError::IoError(_) => "Check that the file exists and is readable",
            ScaffoldError::TomlError(_) => "Check the configuration file syntax",
            ScaffoldError::InvalidConfigValueError { .. } => "Fix the reported configuration value",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
