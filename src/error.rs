//! Error types for the scoring engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a scoring run.

use thiserror::Error;

/// The main error type for the scoring engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use merit_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod {
///     token: "2025/08".to_string(),
///     message: "expected YYYY-MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid period token '2025/08': expected YYYY-MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A period token could not be parsed as `YYYY-MM`.
    #[error("Invalid period token '{token}': {message}")]
    InvalidPeriod {
        /// The token that failed to parse.
        token: String,
        /// A description of the parse error.
        message: String,
    },

    /// An underlying store failed while reading or writing.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
