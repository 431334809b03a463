//! Error handling and error types for the benchmark harness.
//!
//! Only argument validation fails locally. Everything the external engine
//! reports (malformed matrix shape, device unavailable, out of memory) is
//! wrapped in [`BoostmarkError::Engine`] and surfaced to the caller
//! unchanged; there is no retry or recovery logic anywhere in the crate.

use thiserror::Error;

/// Main error type for the benchmark harness.
#[derive(Error, Debug)]
pub enum BoostmarkError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Sample-table construction errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Errors reported by the external boosting engine
    #[error("Engine error: {message}")]
    Engine { message: String },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using BoostmarkError
pub type Result<T> = std::result::Result<T, BoostmarkError>;

impl BoostmarkError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        BoostmarkError::Config {
            message: message.into(),
        }
    }

    /// Create a dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        BoostmarkError::Dataset {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        BoostmarkError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        BoostmarkError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an engine error
    pub fn engine<S: Into<String>>(message: S) -> Self {
        BoostmarkError::Engine {
            message: message.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        BoostmarkError::Internal {
            message: message.into(),
        }
    }

    /// Get error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            BoostmarkError::Config { .. } => "config",
            BoostmarkError::Dataset { .. } => "dataset",
            BoostmarkError::InvalidParameter { .. } => "invalid_parameter",
            BoostmarkError::DimensionMismatch { .. } => "dimension_mismatch",
            BoostmarkError::Engine { .. } => "engine",
            BoostmarkError::Internal { .. } => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BoostmarkError::config("test configuration error");
        assert_eq!(err.category(), "config");

        let err = BoostmarkError::engine("device unavailable");
        assert_eq!(err.category(), "engine");
    }

    #[test]
    fn test_parameter_errors() {
        let err = BoostmarkError::invalid_parameter("train_fraction", "1.5", "must be in (0, 1)");
        assert_eq!(err.category(), "invalid_parameter");
        let message = format!("{}", err);
        assert!(message.contains("train_fraction"));
        assert!(message.contains("1.5"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = BoostmarkError::dimension_mismatch("(100, 10)", "(100, 5)");
        assert_eq!(err.category(), "dimension_mismatch");
    }

    #[test]
    fn test_error_display() {
        let err = BoostmarkError::config("test message");
        let error_string = format!("{}", err);
        assert!(error_string.contains("Configuration error"));
        assert!(error_string.contains("test message"));
    }
}
