//! Error types for the relaxation solver.
//!
//! This module provides a unified error type [`RelaxError`] that covers
//! configuration validation, convergence failures, and output I/O.

use thiserror::Error;

/// Result type alias using [`RelaxError`].
pub type Result<T> = std::result::Result<T, RelaxError>;

/// Unified error type for all solver operations.
#[derive(Error, Debug)]
pub enum RelaxError {
    /// Invalid solver configuration, rejected before any field is allocated.
    #[error("Invalid solver configuration: {message}")]
    InvalidConfig { message: String },

    /// Relaxation did not converge within the configured iteration cap.
    #[error("Relaxation did not converge after {iterations} iterations (delta: {delta:.2e})")]
    ConvergenceFailure { iterations: usize, delta: f64 },

    /// Error writing the potential field to a file.
    #[error("Failed to write field to '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RelaxError {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a convergence failure error.
    pub fn convergence_failure(iterations: usize, delta: f64) -> Self {
        Self::ConvergenceFailure { iterations, delta }
    }
}
