//! Error types for the Benefits Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during benefit calculations.

use thiserror::Error;

/// The main error type for the Benefits Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A category-specific input field was required but not supplied.
    #[error("Missing field '{field}': {message}")]
    MissingField {
        /// The field that was absent.
        field: String,
        /// A description of why the field is required.
        message: String,
    },

    /// A TSP loan request fell outside policy bounds.
    #[error("Invalid loan: {message}")]
    InvalidLoan {
        /// A description of the violated bound.
        message: String,
    },

    /// A front-load target cannot fund the mandatory employer match.
    #[error("Invalid contribution target: {message}")]
    InvalidTarget {
        /// A description of why the target is infeasible.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
