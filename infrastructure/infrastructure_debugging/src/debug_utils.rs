//! Debug Utilities Module
//!
//! Provides debugging utility functions.
//!
//! This module provides infrastructure for debugging:
//! - Debug output utilities
//! - Big number and digit sequence formatting
//! - Debug state management

use std::sync::atomic::{AtomicBool, Ordering};

use entities_numeric::{BigNumber, DigitSequence};

/// Environment variable read by [`DebugUtils::init_from_env`]
pub const DEBUG_ENV_VAR: &str = "RADIX_DEBUG";

/// Numbers with more decimal digits than this are abbreviated in debug output
const MAX_DISPLAY_DIGITS: usize = 48;

/// Global debug state
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static VERBOSE_DEBUG: AtomicBool = AtomicBool::new(false);

/// Debug output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    /// No output
    Off,
    /// `[DEBUG]` lines only
    Debug,
    /// `[DEBUG]` and `[VERBOSE]` lines
    Verbose,
}

impl DebugLevel {
    /// Parse a level setting
    ///
    /// Accepts (case-insensitive) `0`, `false`, `off`, or an empty string for
    /// [`DebugLevel::Off`]; `1`, `true`, `on`, `debug` for
    /// [`DebugLevel::Debug`]; `2`, `verbose` for [`DebugLevel::Verbose`].
    pub fn parse(value: &str) -> Result<Self, DebugError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "off" => Ok(DebugLevel::Off),
            "1" | "true" | "on" | "debug" => Ok(DebugLevel::Debug),
            "2" | "verbose" => Ok(DebugLevel::Verbose),
            other => Err(DebugError::InvalidSetting(format!(
                "{}={:?} (expected off, debug or verbose)",
                DEBUG_ENV_VAR, other
            ))),
        }
    }
}

/// Debug utilities for debugging operations
pub struct DebugUtils;

impl DebugUtils {
    /// Enable debug output
    ///
    /// When enabled, debug output functions will produce output.
    /// When disabled, debug output is suppressed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// DebugUtils::enable();
    /// DebugUtils::debug_output("This will be printed");
    /// DebugUtils::disable();
    /// DebugUtils::debug_output("This will be suppressed");
    /// ```
    pub fn enable() {
        DEBUG_ENABLED.store(true, Ordering::Release);
    }

    /// Disable debug output
    pub fn disable() {
        DEBUG_ENABLED.store(false, Ordering::Release);
    }

    /// Check if debug output is enabled
    pub fn is_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Acquire)
    }

    /// Enable verbose debug output
    ///
    /// Verbose mode traces every step of digit extraction and accumulation.
    pub fn enable_verbose() {
        VERBOSE_DEBUG.store(true, Ordering::Release);
    }

    /// Disable verbose debug output
    pub fn disable_verbose() {
        VERBOSE_DEBUG.store(false, Ordering::Release);
    }

    /// Check if verbose debug is enabled
    pub fn is_verbose() -> bool {
        VERBOSE_DEBUG.load(Ordering::Acquire)
    }

    /// Set both flags from a level
    pub fn apply_level(level: DebugLevel) {
        match level {
            DebugLevel::Off => {
                Self::disable();
                Self::disable_verbose();
            }
            DebugLevel::Debug => {
                Self::enable();
                Self::disable_verbose();
            }
            DebugLevel::Verbose => {
                Self::enable();
                Self::enable_verbose();
            }
        }
    }

    /// Current level derived from both flags
    pub fn level() -> DebugLevel {
        match (Self::is_enabled(), Self::is_verbose()) {
            (false, _) => DebugLevel::Off,
            (true, false) => DebugLevel::Debug,
            (true, true) => DebugLevel::Verbose,
        }
    }

    /// Configure debug output from the `RADIX_DEBUG` environment variable
    ///
    /// An unset variable leaves the current state untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(level))` - The level that was applied
    /// * `Ok(None)` - Variable not set
    /// * `Err(DebugError)` - Variable set to an unrecognized value
    pub fn init_from_env() -> Result<Option<DebugLevel>, DebugError> {
        match std::env::var(DEBUG_ENV_VAR) {
            Ok(value) => {
                let level = DebugLevel::parse(&value)?;
                Self::apply_level(level);
                Ok(Some(level))
            }
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(DebugError::InvalidSetting(
                format!("{} is not valid unicode", DEBUG_ENV_VAR),
            )),
        }
    }

    /// Output a debug message
    ///
    /// This function outputs a debug message to stderr if debug output is
    /// enabled.
    pub fn debug_output(message: &str) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] {}", message);
        }
    }

    /// Output a formatted debug message
    ///
    /// Similar to `debug_output`, but substitutes each `{}` in `format` with
    /// the next argument. Surplus placeholders are left as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// DebugUtils::enable();
    /// DebugUtils::debug_format("Radix: {}", &[&4503599627370496u64]);
    /// ```
    pub fn debug_format(format: &str, args: &[&dyn std::fmt::Display]) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] {}", Self::substitute(format, args));
        }
    }

    /// Output a verbose debug message
    ///
    /// Only outputs if both debug and verbose modes are enabled.
    pub fn verbose_output(message: &str) {
        if Self::is_enabled() && Self::is_verbose() {
            eprintln!("[VERBOSE] {}", message);
        }
    }

    /// Render a big number for debug output
    ///
    /// Long values keep their first and last digits with the total digit
    /// count in between, e.g. `83209871127413901441...00000000 (82 digits)`.
    pub fn number_to_string(value: &BigNumber) -> String {
        let full = value.to_string();
        let (sign, digits) = match full.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", full.as_str()),
        };
        if digits.len() <= MAX_DISPLAY_DIGITS {
            return full;
        }
        let half = MAX_DISPLAY_DIGITS / 2;
        format!(
            "{}{}...{} ({} digits)",
            sign,
            &digits[..half],
            &digits[digits.len() - half..],
            digits.len()
        )
    }

    /// Render a digit sequence for debug output, least significant first
    pub fn digits_to_string(digits: &DigitSequence) -> String {
        format!("[{}] (len {})", digits.to_string().replace(' ', ", "), digits.len())
    }

    /// Display a labelled big number
    pub fn display_number(label: &str, value: &BigNumber) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] {} = {}", label, Self::number_to_string(value));
        }
    }

    /// Display a labelled digit sequence
    pub fn display_digits(label: &str, digits: &DigitSequence) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] {} = {}", label, Self::digits_to_string(digits));
        }
    }

    fn substitute(format: &str, args: &[&dyn std::fmt::Display]) -> String {
        let mut result = String::with_capacity(format.len());
        let mut rest = format;
        let mut args = args.iter();
        while let Some(pos) = rest.find("{}") {
            match args.next() {
                Some(arg) => {
                    result.push_str(&rest[..pos]);
                    result.push_str(&arg.to_string());
                    rest = &rest[pos + 2..];
                }
                None => break,
            }
        }
        result.push_str(rest);
        result
    }
}

/// Debug operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    /// Unrecognized debug setting
    InvalidSetting(String),
}

impl std::fmt::Display for DebugError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebugError::InvalidSetting(msg) => write!(f, "Invalid debug setting: {}", msg),
        }
    }
}

impl std::error::Error for DebugError {}
