//! Arithmetic API Facades
//!
//! `factorial` and the raw `divmod` primitive.

use entities_numeric::BigNumber;
use usecases_factorial::Factorial;

use crate::error::FacadeError;

/// Exact `n!`
///
/// # Errors
///
/// `FacadeError::InvalidArgument` when `n` is negative.
pub fn factorial(n: i64) -> Result<BigNumber, FacadeError> {
    Ok(Factorial::factorial(n)?)
}

/// Exact `n!`, refusing inputs above `max_n`
///
/// # Errors
///
/// `FacadeError::InvalidArgument` when `n` is negative or above `max_n`.
pub fn factorial_with_limit(n: i64, max_n: u64) -> Result<BigNumber, FacadeError> {
    Ok(Factorial::with_limit(max_n).compute(n)?)
}

/// Quotient and remainder of `dividend / divisor`
///
/// For non-negative operands, `dividend == q * divisor + r` with
/// `0 <= r < divisor`.
///
/// # Errors
///
/// `FacadeError::DivisionByZero` when `divisor` is zero.
pub fn divmod(
    dividend: &BigNumber,
    divisor: &BigNumber,
) -> Result<(BigNumber, BigNumber), FacadeError> {
    Ok(dividend.div_mod(divisor)?)
}
