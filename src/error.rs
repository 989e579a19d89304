//! Custom error types for household-split
//!
//! The ledger, roster and calculator never fail: bad input degrades to a
//! no-op or to zero. Errors only come from the edges of the application
//! (configuration, output serialization, command parsing, stdin).

use thiserror::Error;

/// The main error type for household-split operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for command arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Command line parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl SplitError {
    /// Create a "not found" error for expense accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payers
    pub fn payer_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payer",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for dependents
    pub fn dependent_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Dependent",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SplitError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for household-split operations
pub type SplitResult<T> = Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitError::Config("bad catalog".into());
        assert_eq!(err.to_string(), "Configuration error: bad catalog");
    }

    #[test]
    fn test_not_found_error() {
        let err = SplitError::payer_not_found("CARLOS");
        assert_eq!(err.to_string(), "Payer not found: CARLOS");
        assert!(err.is_not_found());
        assert!(!SplitError::Parse("x".into()).is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SplitError = io_err.into();
        assert!(matches!(err, SplitError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SplitError = json_err.into();
        assert!(matches!(err, SplitError::Json(_)));
    }
}
