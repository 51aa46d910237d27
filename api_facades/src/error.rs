//! Facade Errors
//!
//! One error type for every public operation. Each inner layer's error is
//! folded into one of two kinds.

use entities_numeric::ArithmeticError;
use infrastructure_positional_encoding::CodecError;
use usecases_factorial::FactorialError;

/// Facade errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacadeError {
    /// Input outside the operation's domain
    InvalidArgument(String),
    /// Divisor was zero
    DivisionByZero,
}

impl std::fmt::Display for FacadeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacadeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            FacadeError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for FacadeError {}

impl From<ArithmeticError> for FacadeError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => FacadeError::DivisionByZero,
            ArithmeticError::InvalidArgument(msg) => FacadeError::InvalidArgument(msg),
        }
    }
}

impl From<CodecError> for FacadeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::InvalidArgument(msg) => FacadeError::InvalidArgument(msg),
            CodecError::Arithmetic(inner) => inner.into(),
        }
    }
}

impl From<FactorialError> for FacadeError {
    fn from(err: FactorialError) -> Self {
        match err {
            FactorialError::InvalidArgument(msg) => FacadeError::InvalidArgument(msg),
            limit @ FactorialError::LimitExceeded { .. } => {
                FacadeError::InvalidArgument(limit.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arithmetic_error() {
        assert_eq!(
            FacadeError::from(ArithmeticError::DivisionByZero),
            FacadeError::DivisionByZero
        );
    }

    #[test]
    fn test_from_codec_error() {
        let err = CodecError::Arithmetic(ArithmeticError::DivisionByZero);
        assert_eq!(FacadeError::from(err), FacadeError::DivisionByZero);

        let err = CodecError::InvalidArgument("negative".to_string());
        assert_eq!(
            FacadeError::from(err),
            FacadeError::InvalidArgument("negative".to_string())
        );
    }

    #[test]
    fn test_from_factorial_error() {
        let err = FacadeError::from(FactorialError::LimitExceeded { n: 9, max: 3 });
        match err {
            FacadeError::InvalidArgument(msg) => assert!(msg.contains("9!")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FacadeError::DivisionByZero.to_string(), "Division by zero");
    }
}
