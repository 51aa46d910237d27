//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use api_facades::BigNumber;
use clap::{Parser, Subcommand};
use infrastructure_debugging::DebugLevel;

/// Positional codec command-line arguments
#[derive(Parser, Debug)]
#[command(name = "radix")]
#[command(about = "Positional radix codec and exact factorial")]
pub struct CliArgs {
    /// Print debug diagnostics to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print step-by-step traces to stderr (implies --debug)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operation to run
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print n! in decimal
    Factorial {
        /// Non-negative integer
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Encode least-significant-first digits into one integer
    Encode {
        /// Radix (default 2^52, or RADIX_BASE)
        #[arg(long)]
        base: Option<u64>,

        /// Digits, least significant first
        digits: Vec<u64>,
    },

    /// Decode a non-negative integer into least-significant-first digits
    Decode {
        /// Radix (default 2^52, or RADIX_BASE)
        #[arg(long)]
        base: Option<u64>,

        /// Decimal integer
        #[arg(allow_negative_numbers = true)]
        value: BigNumber,
    },

    /// Print quotient and remainder
    Divmod {
        /// Decimal dividend
        #[arg(allow_negative_numbers = true)]
        dividend: BigNumber,

        /// Decimal divisor
        #[arg(allow_negative_numbers = true)]
        divisor: BigNumber,
    },

    /// Replay the reference 60! scenario in radix 2^52
    Demo,
}

impl CliArgs {
    /// Debug level requested by the flags
    ///
    /// `None` when neither flag is given, so the environment decides.
    pub fn debug_level(&self) -> Option<DebugLevel> {
        if self.verbose {
            Some(DebugLevel::Verbose)
        } else if self.debug {
            Some(DebugLevel::Debug)
        } else {
            None
        }
    }
}
