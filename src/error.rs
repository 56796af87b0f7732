//! Error types for quizbank
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Quiz exhaustion is deliberately NOT an error: it is a normal terminal
//! outcome of a session and lives in [`crate::quiz::QuizOutcome`].

use thiserror::Error;

/// The main error type for quizbank
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Client Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    // ============================================================================
    // Bank Definition Errors
    // ============================================================================
    #[error("Bank definition error: {message}")]
    BankDefinition { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a bank definition error
    pub fn bank_definition(message: impl Into<String>) -> Self {
        Self::BankDefinition {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to at the API boundary
    pub fn status(&self) -> u16 {
        match self {
            Error::InvalidArgument { .. } => 422,
            Error::NotFound { .. } => 404,
            Error::BankDefinition { .. }
            | Error::YamlParse(_)
            | Error::JsonParse(_)
            | Error::Config { .. }
            | Error::Io(_)
            | Error::Other(_)
            | Error::Anyhow(_) => 500,
        }
    }

    /// Check if this error is a client error (caller can fix the request)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::NotFound { .. }
        )
    }
}

/// Result type alias for quizbank
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("page must be positive");
        assert_eq!(err.to_string(), "Invalid argument: page must be positive");

        let err = Error::not_found("no questions in category 5");
        assert_eq!(err.to_string(), "Not found: no questions in category 5");

        let err = Error::bank_definition("duplicate category id 3");
        assert_eq!(
            err.to_string(),
            "Bank definition error: duplicate category id 3"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::invalid_argument("").status(), 422);
        assert_eq!(Error::not_found("").status(), 404);
        assert_eq!(Error::bank_definition("").status(), 500);
        assert_eq!(Error::config("").status(), 500);
        assert_eq!(Error::Other("boom".into()).status(), 500);
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::invalid_argument("").is_client_error());
        assert!(Error::not_found("").is_client_error());
        assert!(!Error::config("").is_client_error());
        assert!(!Error::Other("boom".into()).is_client_error());
    }
}
