//! Common Encoding/Decoding Definitions
//!
//! Error type shared by the positional codec.

use entities_numeric::ArithmeticError;

/// Message used when a negative value is handed to the decoder
pub(crate) const NEGATIVE_INPUT: &str = "only non-negative integers are supported";

/// Codec errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input outside the codec's domain (negative value, unusable radix)
    InvalidArgument(String),
    /// Failure raised by the underlying big number primitive
    Arithmetic(ArithmeticError),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CodecError::Arithmetic(err) => write!(f, "Arithmetic error: {}", err),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Arithmetic(err) => Some(err),
            CodecError::InvalidArgument(_) => None,
        }
    }
}

impl From<ArithmeticError> for CodecError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            // Radix construction reports its domain error this way
            ArithmeticError::InvalidArgument(msg) => CodecError::InvalidArgument(msg),
            other => CodecError::Arithmetic(other),
        }
    }
}
