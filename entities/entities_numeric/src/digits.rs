//! Digit Sequences
//!
//! An ordered, least-significant-first list of non-negative digits.
//! Digits are not required to be below any radix: a sequence only becomes
//! canonical relative to a particular radix.

use std::fmt;

use crate::radix::Radix;

/// Least-significant-first digit sequence
///
/// The empty sequence represents zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: Vec<u64>,
}

impl DigitSequence {
    /// Create an empty sequence (the value zero)
    pub fn new() -> Self {
        Self { digits: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` digits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            digits: Vec::with_capacity(capacity),
        }
    }

    /// Append a digit above the current most significant one
    pub fn push(&mut self, digit: u64) {
        self.digits.push(digit);
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for the empty sequence
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits, least significant first
    pub fn as_slice(&self) -> &[u64] {
        &self.digits
    }

    /// Iterate digits, least significant first
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.digits.iter()
    }

    /// The most significant digit, if any
    pub fn most_significant(&self) -> Option<u64> {
        self.digits.last().copied()
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<u64> {
        self.digits
    }

    /// Check the canonical form for `radix`
    ///
    /// Canonical means every digit is in `[0, radix)` and the most
    /// significant digit is non-zero. The empty sequence is canonical.
    pub fn is_canonical(&self, radix: Radix) -> bool {
        let in_range = self.digits.iter().all(|&d| d < radix.get());
        in_range && self.most_significant() != Some(0)
    }

    /// Copy with trailing (most significant) zero digits removed
    pub fn normalized(&self) -> Self {
        let keep = self
            .digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1);
        Self {
            digits: self.digits[..keep].to_vec(),
        }
    }
}

impl From<Vec<u64>> for DigitSequence {
    fn from(digits: Vec<u64>) -> Self {
        Self { digits }
    }
}

impl From<&[u64]> for DigitSequence {
    fn from(digits: &[u64]) -> Self {
        Self {
            digits: digits.to_vec(),
        }
    }
}

impl FromIterator<u64> for DigitSequence {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DigitSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

impl AsRef<[u64]> for DigitSequence {
    fn as_ref(&self) -> &[u64] {
        &self.digits
    }
}

/// Space separated, least significant first
impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for digit in &self.digits {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", digit)?;
            first = false;
        }
        Ok(())
    }
}
