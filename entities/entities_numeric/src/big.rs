//! Big Number Operations
//!
//! Provides the arbitrary precision integer primitive used by the
//! positional codec and by factorial.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic. Magnitude is unbounded, so `plus` and `times` cannot
//! overflow; the only failing operation is division by zero.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{DivMod, Pow};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Integer;

use crate::error::ArithmeticError;

/// Big number representation using malachite's Integer
///
/// The value is signed so that callers can hand a negative number to an
/// operation that only accepts non-negative input and get a proper error
/// back instead of a type mismatch.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value 0
    pub fn zero() -> Self {
        Self { value: Integer::ZERO }
    }

    /// The value 1
    pub fn one() -> Self {
        Self { value: Integer::ONE }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == Integer::ZERO
    }

    /// Check if the number is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < Integer::ZERO
    }

    /// Number of significant bits in the magnitude (0 for zero)
    pub fn bit_length(&self) -> u64 {
        (&self.value).significant_bits()
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Add a machine word: x + y
    pub fn plus_small(&self, y: u64) -> Self {
        Self {
            value: &self.value + Integer::from(y),
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Multiply by a machine word: x * y
    pub fn times_small(&self, y: u64) -> Self {
        Self {
            value: &self.value * Integer::from(y),
        }
    }

    /// Multiply and add: x * y + z
    pub fn mul_add(&self, y: &Self, z: &Self) -> Self {
        Self {
            value: &self.value * &y.value + &z.value,
        }
    }

    /// Raise to a non-negative power: x ^ exp
    ///
    /// `0 ^ 0` is 1.
    pub fn pow(&self, exp: u64) -> Self {
        Self {
            value: self.value.clone().pow(exp),
        }
    }

    /// Combined division and remainder: (x div y, x mod y)
    ///
    /// For non-negative operands the result `(q, r)` satisfies
    /// `x == q * y + r` with `0 <= r < y`. The quotient is rounded towards
    /// negative infinity, so the remainder always has the sign of the
    /// divisor.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` if `y` is zero.
    pub fn div_mod(&self, other: &Self) -> Result<(Self, Self), ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (q, r) = (&self.value).div_mod(&other.value);
        Ok((Self { value: q }, Self { value: r }))
    }

    /// Divide by a machine word, returning the remainder as a word
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` if `divisor` is zero.
    pub fn div_mod_small(&self, divisor: u64) -> Result<(Self, u64), ArithmeticError> {
        let (q, r) = self.div_mod(&Self::from_u64(divisor))?;
        // Floored remainder of a positive divisor is in [0, divisor)
        let r = r.to_u64().ok_or_else(|| {
            ArithmeticError::InvalidArgument(format!(
                "remainder {} does not fit in a machine word",
                r
            ))
        })?;
        Ok((q, r))
    }

    /// Compare two big numbers (signed comparison)
    ///
    /// Returns:
    /// - -1 if self < other
    /// - 0 if self == other
    /// - 1 if self > other
    pub fn comp(&self, other: &Self) -> i32 {
        match self.value.cmp(&other.value) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Convert to string representation in given base
    ///
    /// Digits above 9 use lowercase letters.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::InvalidArgument` unless `2 <= base <= 36`.
    pub fn to_string_base(&self, base: u32) -> Result<String, ArithmeticError> {
        if !(2..=36).contains(&base) {
            return Err(ArithmeticError::InvalidArgument(format!(
                "string base must be between 2 and 36, got {}",
                base
            )));
        }
        if base == 10 {
            return Ok(self.value.to_string());
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let mut n = if self.is_negative() {
            Self {
                value: -self.value.clone(),
            }
        } else {
            self.clone()
        };

        let mut digits = Vec::new();
        while !n.is_zero() {
            let (q, r) = n.div_mod_small(u64::from(base))?;
            let ch = std::char::from_digit(r as u32, base).unwrap_or('?');
            digits.push(ch);
            n = q;
        }

        let mut result = String::with_capacity(digits.len() + 1);
        if self.is_negative() {
            result.push('-');
        }
        result.extend(digits.iter().rev());
        Ok(result)
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for BigNumber {
    type Err = ArithmeticError;

    /// Parse a decimal integer with an optional leading `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Integer::from_str(trimmed)
            .map(Self::from_integer)
            .map_err(|_| {
                ArithmeticError::InvalidArgument(format!("not a decimal integer: {:?}", s))
            })
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}
