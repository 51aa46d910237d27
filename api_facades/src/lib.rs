//! API Facades Layer
//!
//! Provides the four public operations as plain functions:
//!
//! | Operation | Output | Failure |
//! |---|---|---|
//! | [`encode`] | big integer | `InvalidArgument` for base 0 |
//! | [`decode`] | digit sequence | `InvalidArgument` for negative input or base < 2 |
//! | [`factorial`] | `n!` | `InvalidArgument` for negative `n` |
//! | [`divmod`] | `(quotient, remainder)` | `DivisionByZero` |
//!
//! All facades call underlying Rust modules from inner layers and report
//! failures through the single [`FacadeError`] taxonomy.

pub mod arithmetic_facades;
pub mod codec_facades;
pub mod error;

// Re-export main facade functions
pub use arithmetic_facades::{divmod, factorial, factorial_with_limit};
pub use codec_facades::{decode, encode, DEFAULT_BASE};
pub use error::FacadeError;

// Value types callers need to use the facades
pub use entities_numeric::{BigNumber, DigitSequence, Radix};
