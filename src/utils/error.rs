use crate::domain::model::Rejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WearError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input for '{field}': {reason}")]
    InputError { field: String, reason: String },

    #[error("Calculation declined: {0}")]
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Calculation,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WearError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WearError::ConfigError { .. }
            | WearError::ConfigValidationError { .. }
            | WearError::InvalidConfigValueError { .. }
            | WearError::MissingConfigError { .. } => ErrorCategory::Configuration,
            WearError::InputError { .. } => ErrorCategory::Input,
            WearError::Rejected(_) => ErrorCategory::Calculation,
            WearError::CsvError(_) | WearError::IoError(_) | WearError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Calculation => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for printing straight to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            WearError::IoError(e) => format!("Could not read or write a file: {}", e),
            WearError::CsvError(e) => format!("Could not write the CSV report: {}", e),
            WearError::SerializationError(e) => format!("Could not write the JSON report: {}", e),
            WearError::ConfigError { message } => format!("Configuration problem: {}", message),
            WearError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            WearError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            WearError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            WearError::InputError { field, reason } => format!("{}: {}", field, reason),
            WearError::Rejected(rejection) => format!("No record added: {}", rejection),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WearError::IoError(_) => "Check that the path exists and is writable",
            WearError::CsvError(_) | WearError::SerializationError(_) => {
                "Try a different report format or output path"
            }
            WearError::ConfigError { .. }
            | WearError::ConfigValidationError { .. }
            | WearError::InvalidConfigValueError { .. }
            | WearError::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags and run again"
            }
            WearError::InputError { .. } => {
                "Odometer readings must be whole, non-negative kilometre values"
            }
            WearError::Rejected(Rejection::UnknownPart { .. }) => {
                "Run with --list-parts (or type 'parts') to see the known part names"
            }
            WearError::Rejected(Rejection::ReadingBelowService { .. }) => {
                "The current odometer reading must not be below the last service reading"
            }
        }
    }

    /// Process exit code for the binary, derived from severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl From<Rejection> for WearError {
    fn from(rejection: Rejection) -> Self {
        WearError::Rejected(rejection)
    }
}

impl From<toml::de::Error> for WearError {
    fn from(e: toml::de::Error) -> Self {
        WearError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, WearError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_low_severity() {
        let err = WearError::from(Rejection::ReadingBelowService {
            last: 10_000,
            current: 5_000,
        });
        assert_eq!(err.category(), ErrorCategory::Calculation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
        assert!(err.user_friendly_message().contains("No record added"));
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = WearError::MissingConfigError {
            field: "catalog.parts".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = WearError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
