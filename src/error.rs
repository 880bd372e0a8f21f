//! Error types for the Termination Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during settlement calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Termination Settlement Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateRange {
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: termination date 2023-01-01 must follow hire date 2024-01-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The termination date does not strictly follow the hire date.
    #[error("Invalid date range: termination date {termination_date} must follow hire date {hire_date}")]
    InvalidDateRange {
        /// The hire date supplied by the caller.
        hire_date: NaiveDate,
        /// The termination date supplied by the caller.
        termination_date: NaiveDate,
    },

    /// A request field was out of range or otherwise invalid.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

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

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
