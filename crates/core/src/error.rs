//! Error types for the slipway-core crate

use miette::Diagnostic;
use thiserror::Error;

/// A job spec did not conform to the shape its job type declares.
///
/// Carries the serde path into the offending field so operators can locate
/// the mismatch in the stored workflow template.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("job spec does not match the declared shape at `{path}`: {message}")]
#[diagnostic(code(slipway::spec::decode))]
pub struct DecodeError {
    /// Path into the spec document where deserialization failed
    pub path: String,
    /// The underlying deserializer message
    pub message: String,
}

impl DecodeError {
    /// Create a decode error with path context
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for slipway-core operations
pub type Result<T> = std::result::Result<T, DecodeError>;
