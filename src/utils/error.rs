use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GreeterError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::IoError(e) => format!("Could not read a file: {}", e),
            GreeterError::SerializationError(_) => "Failed to render the greeting".to_string(),
            GreeterError::ConfigError { field, .. } => {
                format!("The configuration could not be loaded ({})", field)
            }
            GreeterError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreeterError::IoError(_) => "Check that the config file exists and is readable",
            GreeterError::SerializationError(_) => "Try --format text",
            GreeterError::ConfigError { .. } => "Make sure the config file is valid TOML",
            GreeterError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
