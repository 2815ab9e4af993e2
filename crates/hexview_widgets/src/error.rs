//! Style error types

use thiserror::Error;

/// Errors raised when a host property value cannot be applied
///
/// The style keeps its previous value whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("{field}: expected a non-negative number, got {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field}: invalid color code {value}")]
    InvalidColor { field: &'static str, value: String },

    #[error("{field}: expected a boolean, got {value}")]
    InvalidBool { field: &'static str, value: String },

    #[error("sides: expected an integer from 3 to 4096, got {0}")]
    InvalidSides(String),

    #[error("unknown property: {0}")]
    UnknownProp(String),
}

/// Result type for style updates
pub type Result<T> = std::result::Result<T, StyleError>;
