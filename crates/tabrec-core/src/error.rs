//! Error types for tabrec-core

use thiserror::Error;

/// Result type alias using [`FormatError`]
pub type ConvResult<T> = std::result::Result<T, FormatError>;

/// The single error kind raised by the conversion runtime.
///
/// Raised when non-empty cell text (or a non-empty array element, or a
/// well-formed map entry's key/value) cannot be parsed as its declared
/// scalar type. Empty input never produces this error; it decodes to the
/// type's zero value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {text:?} as {target}")]
pub struct FormatError {
    /// Schema name of the target scalar type (e.g. "int32")
    pub target: &'static str,
    /// The offending cell text, verbatim
    pub text: String,
}

impl FormatError {
    /// Create a new format error for the given target type and input text
    pub fn new<S: Into<String>>(target: &'static str, text: S) -> Self {
        FormatError {
            target,
            text: text.into(),
        }
    }
}
