//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, validation patterns)
//! - CLI option types and parsing
//! - The validated configuration consumed by the checks

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{input_error_message, CheckConfig, LogFormat, LogLevel, Opt};
