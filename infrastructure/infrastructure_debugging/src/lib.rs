//! Infrastructure Layer: Debugging
//!
//! Provides debugging utilities.
//! Depends on the Entities layer only.
//!
//! This crate provides infrastructure for debugging:
//! - Debug output utilities (similar to printf debugging)
//! - Big number and digit sequence display
//! - Debug state management, including setup from the environment

pub mod debug_utils;

pub use debug_utils::{DebugError, DebugLevel, DebugUtils, DEBUG_ENV_VAR};
