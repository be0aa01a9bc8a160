//! Error types for the autocomplete selector.
//!
//! This module defines the centralized error type [`AutoselectError`] and a type alias
//! [`Result`] for convenient error handling. Errors only surface at the loading
//! boundaries (configuration, option files, theme files). The control itself is
//! total: its event handling never fails.

use thiserror::Error;

/// The main error type for loading and validating selector inputs.
///
/// # Examples
///
/// ```
/// use autoselect::domain::AutoselectError;
///
/// fn validate_config() -> Result<(), AutoselectError> {
///     Err(AutoselectError::Config("max_visible_rows must be positive".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum AutoselectError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while
    /// reading an options or theme file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// An options file could not be parsed.
    ///
    /// The string names the file and the underlying TOML or JSON parse error.
    #[error("Options error: {0}")]
    Options(String),

    /// Two options in one set share the same value.
    ///
    /// Option values are lookup keys; a duplicate would make first-match
    /// lookup ambiguous, so the set is rejected at construction.
    #[error("Duplicate option value: {0}")]
    DuplicateValue(String),
}

/// A specialized `Result` type for selector loading operations.
pub type Result<T> = std::result::Result<T, AutoselectError>;
