//! Error types for the mail options core.
//!
//! # Design
//! Naming an undeclared field and handing a non-boolean to the boolean
//! translation are programming errors at the call site, so each gets its own
//! variant carrying the offending name. Encoding failures from the CSV and
//! form encoders keep the underlying message for debugging.

use thiserror::Error;

/// Result type alias for option building.
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Errors returned while populating or encoding mail options.
#[must_use = "errors should be handled or propagated"]
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The field name is not declared by the option type.
    #[error("{0} is not defined.")]
    InvalidOption(String),

    /// The boolean translation received something other than `true`/`false`.
    #[error("value of {field} must be a boolean")]
    InvalidBoolean { field: String },

    /// Loose input carried a value kind a plain field cannot hold.
    #[error("{field} cannot hold a value of type {kind}")]
    InvalidValue { field: String, kind: &'static str },

    /// The list could not be written as a CSV line.
    #[error("csv encoding failed: {0}")]
    Encoding(String),

    /// The populated fields could not be form-encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
