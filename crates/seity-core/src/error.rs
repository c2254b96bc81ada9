//! Seity error types.
//!
//! The simulation itself is pure numeric computation with no I/O failure
//! modes. Errors only arise at the edges: rejecting invalid oscillator
//! parameters, validating configuration, and (de)serializing configuration
//! or snapshots.

use thiserror::Error;

/// Errors that can occur while building or driving a simulation.
#[derive(Debug, Error)]
pub enum SeityError {
    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Filesystem error while loading or exporting
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Result type for Seity operations.
pub type SeityResult<T> = Result<T, SeityError>;

impl From<serde_json::Error> for SeityError {
    fn from(err: serde_json::Error) -> Self {
        SeityError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for SeityError {
    fn from(err: std::io::Error) -> Self {
        SeityError::IoError(err.to_string())
    }
}

impl SeityError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        SeityError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error is caused by caller input (can be retried with
    /// different parameters).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SeityError::InvalidParameter { .. }
                | SeityError::ConfigError(_)
                | SeityError::SerializationError(_)
        )
    }
}
