//! Frameworks Layer: Command-Line Driver
//!
//! Thin driver over the API facades:
//! - Command-line argument parsing (clap)
//! - Configuration from environment variables
//! - Command execution producing printable lines
//!
//! The `radix` binary in `main.rs` wires these together.

pub mod args;
pub mod commands;
pub mod env;

pub use args::{CliArgs, Command};
pub use commands::run;
pub use env::Settings;
