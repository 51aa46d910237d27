//! Factorial Module
//!
//! Provides exact `n!` for `n >= 0`.

use entities_numeric::BigNumber;
use infrastructure_debugging::DebugUtils;

/// Factorial calculator
///
/// Unlimited by default. [`Factorial::with_limit`] caps the accepted input
/// for callers that take `n` from untrusted sources, since the result grows
/// super-exponentially.
///
/// # Examples
///
/// ```rust
/// use usecases_factorial::Factorial;
///
/// let f = Factorial::factorial(25).unwrap();
/// assert_eq!(f.to_string(), "15511210043330985984000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Factorial {
    limit: Option<u64>,
}

impl Factorial {
    /// Create an unlimited calculator
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Create a calculator that rejects `n > max_n`
    pub fn with_limit(max_n: u64) -> Self {
        Self { limit: Some(max_n) }
    }

    /// The configured input cap, if any
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Compute `n!` without an input cap
    ///
    /// # Errors
    ///
    /// `FactorialError::InvalidArgument` if `n` is negative.
    pub fn factorial(n: i64) -> Result<BigNumber, FactorialError> {
        Self::new().compute(n)
    }

    /// Compute `n!`
    ///
    /// `0! == 1! == 1` and `n! == n * (n-1)!`. Evaluated iteratively.
    ///
    /// # Errors
    ///
    /// * `FactorialError::InvalidArgument` - `n` is negative
    /// * `FactorialError::LimitExceeded` - `n` is above the configured cap
    pub fn compute(&self, n: i64) -> Result<BigNumber, FactorialError> {
        let n = u64::try_from(n).map_err(|_| {
            FactorialError::InvalidArgument(format!(
                "factorial is only defined for non-negative integers, got {}",
                n
            ))
        })?;
        if let Some(max) = self.limit {
            if n > max {
                return Err(FactorialError::LimitExceeded { n, max });
            }
        }

        let result = Self::product(n);
        if DebugUtils::is_enabled() {
            DebugUtils::display_number(&format!("{}!", n), &result);
        }
        Ok(result)
    }

    /// Product `1 * 2 * ... * n`
    ///
    /// Consecutive factors are multiplied into one machine word until the
    /// next factor would overflow it; the word is then folded into the big
    /// accumulator.
    fn product(n: u64) -> BigNumber {
        let mut acc = BigNumber::one();
        let mut word: u64 = 1;
        for k in 2..=n {
            match word.checked_mul(k) {
                Some(next) => word = next,
                None => {
                    acc = acc.times_small(word);
                    if DebugUtils::is_verbose() {
                        DebugUtils::verbose_output(&format!(
                            "factorial: folded factors below {} ({} bits)",
                            k,
                            acc.bit_length()
                        ));
                    }
                    word = k;
                }
            }
        }
        acc.times_small(word)
    }
}

/// Factorial errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorialError {
    /// Negative input
    InvalidArgument(String),
    /// Input above the configured cap
    LimitExceeded {
        /// Requested input
        n: u64,
        /// Configured cap
        max: u64,
    },
}

impl std::fmt::Display for FactorialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorialError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            FactorialError::LimitExceeded { n, max } => {
                write!(f, "Limit exceeded: {}! requested, limit is {}", n, max)
            }
        }
    }
}

impl std::error::Error for FactorialError {}
