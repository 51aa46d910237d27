//! Codec API Facades
//!
//! `encode` and `decode` with an optional base defaulting to `2^52`.

use entities_numeric::{BigNumber, DigitSequence, Radix};
use infrastructure_positional_encoding::PositionalCodec;

use crate::error::FacadeError;

/// Base used when the caller passes `None`
pub const DEFAULT_BASE: u64 = Radix::DEFAULT_VALUE;

fn codec_for(base: Option<u64>) -> Result<PositionalCodec, FacadeError> {
    let radix = match base {
        Some(value) => Radix::new(value)?,
        None => Radix::DEFAULT,
    };
    Ok(PositionalCodec::new(radix))
}

/// Encode a least-significant-first digit sequence
///
/// Returns `Σ digits[i] * base^i`. Digits may exceed the base.
///
/// # Errors
///
/// `FacadeError::InvalidArgument` only when `base` is `Some(0)`.
///
/// # Examples
///
/// ```rust
/// use api_facades::encode;
///
/// assert_eq!(encode(&[1, 1], Some(10)).unwrap().to_u64(), Some(11));
/// assert_eq!(encode(&[0, 1], None).unwrap().to_u64(), Some(1 << 52));
/// ```
pub fn encode(digits: &[u64], base: Option<u64>) -> Result<BigNumber, FacadeError> {
    Ok(codec_for(base)?.encode(digits))
}

/// Decode a non-negative integer into its canonical digit sequence
///
/// # Errors
///
/// `FacadeError::InvalidArgument` when `value` is negative or `base` is
/// below 2.
pub fn decode(value: &BigNumber, base: Option<u64>) -> Result<DigitSequence, FacadeError> {
    Ok(codec_for(base)?.decode(value)?)
}
