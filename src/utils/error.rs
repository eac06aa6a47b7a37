use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::IoError(_) => ErrorCategory::Io,
            DrillError::SerializationError(_) => ErrorCategory::Serialization,
            DrillError::ConfigError { .. }
            | DrillError::InvalidConfigValueError { .. }
            | DrillError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DrillError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrillError::IoError(_) => ErrorSeverity::Critical,
            DrillError::SerializationError(_) => ErrorSeverity::High,
            DrillError::ConfigError { .. }
            | DrillError::InvalidConfigValueError { .. }
            | DrillError::MissingConfigError { .. } => ErrorSeverity::High,
            DrillError::InputError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DrillError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            DrillError::SerializationError(_) => {
                "The report could not be serialized; re-run with --verbose for details".to_string()
            }
            DrillError::ConfigError { .. } => {
                "Review the configuration file syntax and try again".to_string()
            }
            DrillError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value supplied for '{}'", field)
            }
            DrillError::MissingConfigError { field } => {
                format!("Add the required field '{}' to the configuration", field)
            }
            DrillError::InputError { .. } => {
                "Enter numeric values only, and finish the list with 0".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::IoError(e) => format!("A file operation failed: {}", e),
            DrillError::SerializationError(_) => "Failed to write the drill report".to_string(),
            DrillError::ConfigError { message } => format!("Configuration problem: {}", message),
            DrillError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            DrillError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            DrillError::InputError { message } => format!("Input problem: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
