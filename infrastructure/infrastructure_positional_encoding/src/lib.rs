//! Infrastructure Layer: Positional Encoding
//!
//! Converts between a least-significant-first digit sequence and the single
//! arbitrary precision integer it denotes under a fixed radix.
//!
//! ## Overview
//!
//! The `infrastructure_positional_encoding` crate is part of the infrastructure
//! layer. It is built entirely on the `BigNumber` primitive from the Entities
//! layer: encoding uses multiply/add, decoding uses divmod.
//!
//! ## Codecs
//!
//! - **[`positional_codec`](positional_codec/index.html)**: Encoder and decoder
//!   for a configurable radix (default `2^52`).
//!
//! ## Laws
//!
//! - `encode(decode(v)) == v` for every `v >= 0`
//! - `decode` always returns the canonical form, so `decode(encode(d)) == d`
//!   only when `d` is already canonical for the radix
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): BigNumber, Radix and DigitSequence types

mod common;

pub mod positional_codec;

pub use positional_codec::PositionalCodec;

// Re-export error types for convenience
pub use common::CodecError;
