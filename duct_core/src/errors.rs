//! # Error Types
//!
//! Structured error types for duct_core. Only conditions that stop a
//! calculation live here. "No suitable size" and unusable catalog entries are
//! normal outcomes and show up as `None` values in the results instead.
//!
//! ## Example
//!
//! ```rust
//! use duct_core::errors::{CalcError, CalcResult};
//!
//! fn validate_wall(wall_thickness_mm: f64) -> CalcResult<()> {
//!     if wall_thickness_mm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "wall_thickness_mm",
//!             wall_thickness_mm.to_string(),
//!             "Wall thickness cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for duct_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// No valid cable rows (total quantity is zero). Not a failure: the
    /// caller should prompt for cables rather than report an error.
    #[error("No cables to size: add at least one cable with a positive OD and quantity")]
    EmptyInput,

    /// The resolved fill factor is zero or negative
    #[error("Invalid fill factor {fill_factor}: must be greater than zero")]
    InvalidFillFactor { fill_factor: f64 },

    /// An input value is invalid (out of range, duplicate, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML parsing error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidFillFactor error
    pub fn invalid_fill_factor(fill_factor: f64) -> Self {
        CalcError::InvalidFillFactor { fill_factor }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the caller should treat this as a failure.
    ///
    /// `EmptyInput` is the only non-blocking variant: the UI shows a neutral
    /// prompt and waits for more input.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, CalcError::EmptyInput)
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::EmptyInput => "EMPTY_INPUT",
            CalcError::InvalidFillFactor { .. } => "INVALID_FILL_FACTOR",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
