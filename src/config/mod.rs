//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default resolver, report layout)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ColorChoice, Config, ConfigValidationError, LogFormat, LogLevel, Opt};
