//! Error types and handling for costcheck
//!
//! Coercion and formatting are total and never produce these errors; they
//! only surface from configuration loading and logging setup.

use thiserror::Error;

/// Result type alias for costcheck operations
pub type Result<T> = std::result::Result<T, CostcheckError>;

/// Main error type for costcheck
#[derive(Debug, Error)]
pub enum CostcheckError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl CostcheckError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        CostcheckError::Config {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        CostcheckError::Serialization {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        CostcheckError::Io {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        CostcheckError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CostcheckError {
    fn from(err: std::io::Error) -> Self {
        CostcheckError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for CostcheckError {
    fn from(err: serde_yaml::Error) -> Self {
        CostcheckError::serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CostcheckError {
    fn from(err: serde_json::Error) -> Self {
        CostcheckError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CostcheckError::config("test config error");
        assert!(matches!(err, CostcheckError::Config { .. }));

        let err = CostcheckError::validation("field", "test validation error");
        assert!(matches!(err, CostcheckError::Validation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = CostcheckError::config("test error");
        assert_eq!(format!("{}", err), "Configuration error: test error");

        let err = CostcheckError::validation("test_field", "invalid value");
        assert_eq!(
            format!("{}", err),
            "Validation error: test_field - invalid value"
        );
    }

    #[test]
    fn test_yaml_error_maps_to_serialization() {
        let yaml_err = serde_yaml::from_str::<u32>("[unclosed").unwrap_err();
        let err: CostcheckError = yaml_err.into();
        assert!(matches!(err, CostcheckError::Serialization { .. }));
    }
}
