//! Positional Radix
//!
//! The fixed divisor of a positional notation. Every digit's place value
//! is `radix ^ index`.

use std::fmt;
use std::str::FromStr;

use crate::big::BigNumber;
use crate::error::ArithmeticError;

/// Positive radix of a positional digit sequence
///
/// The default, `2^52`, keeps every canonical digit exactly representable
/// in the 53-bit mantissa of an IEEE-754 double.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u64);

impl Radix {
    /// Value of the default radix, `2^52`
    pub const DEFAULT_VALUE: u64 = 1 << 52;

    /// The default radix, `2^52`
    pub const DEFAULT: Radix = Radix(Self::DEFAULT_VALUE);

    /// Create a radix
    ///
    /// # Errors
    ///
    /// `ArithmeticError::InvalidArgument` if `value` is zero.
    pub fn new(value: u64) -> Result<Self, ArithmeticError> {
        if value == 0 {
            return Err(ArithmeticError::InvalidArgument(
                "radix must be a positive integer".to_string(),
            ));
        }
        Ok(Radix(value))
    }

    /// The radix as a machine word
    pub fn get(self) -> u64 {
        self.0
    }

    /// The radix as a big number
    pub fn to_big(self) -> BigNumber {
        BigNumber::from_u64(self.0)
    }

    /// Whether digit extraction terminates under this radix
    ///
    /// Dividing by 1 never shrinks the quotient, so decoding needs at least 2.
    pub fn supports_decoding(self) -> bool {
        self.0 >= 2
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u64> for Radix {
    type Error = ArithmeticError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Radix {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u64>().map_err(|e| {
            ArithmeticError::InvalidArgument(format!("invalid radix {:?}: {}", s, e))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
