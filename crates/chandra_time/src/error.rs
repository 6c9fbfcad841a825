//! Error types for instant parsing.

use thiserror::Error;

/// Errors from parsing or validating a UTC instant.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The text is not of the form `YYYY-MM-DDThh:mm:ss[Z]`.
    #[error("expected YYYY-MM-DDThh:mm:ssZ, got {0}")]
    Format(String),
    /// A numeric field failed to parse.
    #[error("invalid {field}: {value}")]
    Field { field: &'static str, value: String },
    /// A field parsed but is outside its calendar range.
    #[error("{0} out of range")]
    OutOfRange(&'static str),
}
