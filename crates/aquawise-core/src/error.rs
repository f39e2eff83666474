//! Error types for aquawise-core
//!
//! Almost everything in this crate is infallible. The exceptions are
//! caller-supplied prediction input and startup configuration.

use thiserror::Error;

/// Core error type for AquaWise operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    // ===================
    // Input Errors
    // ===================
    #[error("Insufficient history: at least {required} entries required, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    #[error("Missing numeric usage at index {index}")]
    MissingUsage { index: usize },

    #[error("Invalid usage value at index {index}: {value}")]
    InvalidUsage { index: usize, value: f64 },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    /// Returns true if the error was caused by caller input rather than
    /// server state, i.e. it should surface as a client error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CoreError::InsufficientHistory { .. }
                | CoreError::MissingUsage { .. }
                | CoreError::InvalidUsage { .. }
        )
    }
}
