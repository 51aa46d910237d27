//! Positional Codec Module
//!
//! Provides encoding of a digit sequence into one big number and decoding of
//! a big number back into its canonical digit sequence.
//!
//! A digit sequence `[d0, d1, ..., dk]` (least significant first) under radix
//! `b` denotes `d0 + d1*b + d2*b^2 + ... + dk*b^k`. All accumulation happens
//! on `BigNumber`, so large radices and long sequences never lose precision.

use entities_numeric::{BigNumber, DigitSequence, Radix};
use infrastructure_debugging::DebugUtils;

use crate::common::{CodecError, NEGATIVE_INPUT};

/// Positional codec for a fixed radix
///
/// # Examples
///
/// ```rust
/// use entities_numeric::{BigNumber, Radix};
/// use infrastructure_positional_encoding::PositionalCodec;
///
/// let codec = PositionalCodec::new(Radix::new(10).unwrap());
/// let value = codec.encode(&[3, 2, 1]);
/// assert_eq!(value, BigNumber::from_u64(123));
/// assert_eq!(codec.decode(&value).unwrap().as_slice(), &[3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionalCodec {
    radix: Radix,
}

impl PositionalCodec {
    /// Create a codec for `radix`
    pub fn new(radix: Radix) -> Self {
        Self { radix }
    }

    /// Create a codec from a raw radix value
    ///
    /// # Errors
    ///
    /// `CodecError::InvalidArgument` if `radix` is zero.
    pub fn with_radix(radix: u64) -> Result<Self, CodecError> {
        Ok(Self::new(Radix::new(radix)?))
    }

    /// The radix this codec works in
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Encode a digit sequence into a big number
    ///
    /// Total over every input: digits are not required to be below the
    /// radix, and trailing zero digits are allowed. The empty sequence
    /// encodes to zero.
    ///
    /// Evaluated by Horner's rule from the most significant digit down,
    /// `acc = acc * radix + digit`.
    pub fn encode(&self, digits: &[u64]) -> BigNumber {
        let base = self.radix.to_big();
        let mut acc = BigNumber::zero();
        for (index, &digit) in digits.iter().enumerate().rev() {
            acc = acc.mul_add(&base, &BigNumber::from_u64(digit));
            if DebugUtils::is_verbose() {
                DebugUtils::verbose_output(&format!(
                    "encode: digit[{}] = {} -> {}",
                    index,
                    digit,
                    DebugUtils::number_to_string(&acc)
                ));
            }
        }
        DebugUtils::debug_format(
            "encoded {} digits in radix {}",
            &[&digits.len(), &self.radix],
        );
        acc
    }

    /// Decode a big number into its canonical digit sequence
    ///
    /// Repeatedly divides by the radix, collecting remainders least
    /// significant first, until the quotient reaches zero. Every digit of the
    /// result is below the radix and the last digit is non-zero; zero decodes
    /// to the empty sequence.
    ///
    /// # Errors
    ///
    /// * `CodecError::InvalidArgument` - `value` is negative, or the radix
    ///   is 1 (the quotient would never shrink)
    pub fn decode(&self, value: &BigNumber) -> Result<DigitSequence, CodecError> {
        if value.is_negative() {
            return Err(CodecError::InvalidArgument(NEGATIVE_INPUT.to_string()));
        }
        if !self.radix.supports_decoding() {
            return Err(CodecError::InvalidArgument(format!(
                "cannot decode in radix {}, need at least 2",
                self.radix
            )));
        }

        let mut digits = DigitSequence::with_capacity(self.digit_estimate(value));
        let mut rest = value.clone();
        while !rest.is_zero() {
            let (quotient, digit) = rest.div_mod_small(self.radix.get())?;
            if DebugUtils::is_verbose() {
                DebugUtils::verbose_output(&format!(
                    "decode: digit[{}] = {}",
                    digits.len(),
                    digit
                ));
            }
            digits.push(digit);
            rest = quotient;
        }

        DebugUtils::debug_format(
            "decoded {} digits in radix {}",
            &[&digits.len(), &self.radix],
        );
        Ok(digits)
    }

    /// Encode with an explicit radix
    pub fn encode_with(digits: &[u64], radix: Radix) -> BigNumber {
        Self::new(radix).encode(digits)
    }

    /// Decode with an explicit radix
    ///
    /// # Errors
    ///
    /// See [`PositionalCodec::decode`].
    pub fn decode_with(value: &BigNumber, radix: Radix) -> Result<DigitSequence, CodecError> {
        Self::new(radix).decode(value)
    }

    /// Upper bound on the number of digits `value` decodes to
    fn digit_estimate(&self, value: &BigNumber) -> usize {
        // floor(log2(radix)), at least 1 once decoding is allowed
        let bits_per_digit = u64::from(63 - self.radix.get().leading_zeros()).max(1);
        let estimate = value.bit_length() / bits_per_digit + 1;
        usize::try_from(estimate).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(radix: u64) -> PositionalCodec {
        PositionalCodec::with_radix(radix).unwrap()
    }

    #[test]
    fn test_default_radix() {
        assert_eq!(PositionalCodec::default().radix(), Radix::DEFAULT);
        assert_eq!(PositionalCodec::default().radix().get(), 1 << 52);
    }

    #[test]
    fn test_zero_radix_rejected() {
        assert!(matches!(
            PositionalCodec::with_radix(0),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_encode_empty_is_zero() {
        assert!(codec(10).encode(&[]).is_zero());
        assert!(PositionalCodec::default().encode(&[]).is_zero());
    }

    #[test]
    fn test_encode_decimal() {
        assert_eq!(codec(10).encode(&[3, 2, 1]).to_u64(), Some(123));
        assert_eq!(codec(2).encode(&[1, 0, 1, 1]).to_u64(), Some(13));
    }

    #[test]
    fn test_encode_accepts_non_canonical_digits() {
        // 5 + 12*10
        assert_eq!(codec(10).encode(&[5, 12]).to_u64(), Some(125));
        // trailing zeros contribute nothing
        assert_eq!(codec(10).encode(&[1, 0, 0]).to_u64(), Some(1));
    }

    #[test]
    fn test_encode_radix_one_sums_digits() {
        assert_eq!(codec(1).encode(&[3, 4, 5]).to_u64(), Some(12));
    }

    #[test]
    fn test_encode_max_digits_default_radix() {
        let digits = [u64::MAX, u64::MAX];
        let base = Radix::DEFAULT.to_big();
        let expected = BigNumber::from_u64(u64::MAX)
            .plus(&BigNumber::from_u64(u64::MAX).times(&base));
        assert_eq!(PositionalCodec::default().encode(&digits), expected);
    }

    #[test]
    fn test_decode_zero_is_empty() {
        assert!(codec(10).decode(&BigNumber::zero()).unwrap().is_empty());
    }

    #[test]
    fn test_decode_decimal() {
        let digits = codec(10).decode(&BigNumber::from_u64(1205)).unwrap();
        assert_eq!(digits.as_slice(), &[5, 0, 2, 1]);
    }

    #[test]
    fn test_decode_normalizes() {
        let c = codec(10);
        let value = c.encode(&[5, 12, 0, 0]);
        assert_eq!(c.decode(&value).unwrap().as_slice(), &[5, 2, 1]);
    }

    #[test]
    fn test_decode_negative_rejected() {
        let result = codec(10).decode(&BigNumber::from_i64(-1));
        assert_eq!(
            result,
            Err(CodecError::InvalidArgument(
                "only non-negative integers are supported".to_string()
            ))
        );
    }

    #[test]
    fn test_decode_radix_one_rejected() {
        let result = codec(1).decode(&BigNumber::from_u64(3));
        assert!(matches!(result, Err(CodecError::InvalidArgument(_))));
    }

    #[test]
    fn test_decode_radix_u64_max() {
        let c = codec(u64::MAX);
        let value = BigNumber::from_u64(u64::MAX).plus_small(1);
        assert_eq!(c.decode(&value).unwrap().as_slice(), &[1, 1]);
    }

    #[test]
    fn test_digit_estimate_is_upper_bound() {
        for radix in [2u64, 3, 10, 255, 1 << 52, u64::MAX] {
            let c = codec(radix);
            let value = BigNumber::from_u64(3).pow(500);
            let digits = c.decode(&value).unwrap();
            assert!(c.digit_estimate(&value) >= digits.len(), "radix {}", radix);
        }
    }

    #[test]
    fn test_with_helpers() {
        let radix = Radix::new(16).unwrap();
        let value = PositionalCodec::encode_with(&[15, 15], radix);
        assert_eq!(value.to_u64(), Some(255));
        let digits = PositionalCodec::decode_with(&value, radix).unwrap();
        assert_eq!(digits.as_slice(), &[15, 15]);
    }
}
