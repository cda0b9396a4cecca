//! Error types for the Net Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use thiserror::Error;

use crate::models::InputField;

/// The main error type for the Net Salary Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use netto_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/2025.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/2025.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a structural rule.
    #[error("Invalid tax year configuration for {year}: {message}")]
    ConfigInvalid {
        /// The tax year the configuration describes.
        year: i32,
        /// A description of the structural violation.
        message: String,
    },

    /// No configuration is loaded for the requested tax year.
    #[error("No configuration loaded for tax year {year}")]
    YearNotFound {
        /// The tax year that was requested.
        year: i32,
    },

    /// A calculation input violated a hard precondition.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: InputField,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
