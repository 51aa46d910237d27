//! Arithmetic Errors
//!
//! Error type returned by the big number primitive and the value types
//! built on top of it.

/// Arithmetic operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Divisor was zero
    DivisionByZero,
    /// Argument outside the domain of the operation
    InvalidArgument(String),
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "Division by zero"),
            ArithmeticError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ArithmeticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "Division by zero");
        let err = ArithmeticError::InvalidArgument("radix must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: radix must be positive");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ArithmeticError::DivisionByZero);
        assert!(err.source().is_none());
    }
}
