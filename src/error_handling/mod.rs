//! Error handling.
//!
//! This module provides:
//! - Hard-error types for checks and start-up
//! - Error categorization for log output
//! - Rendering of error source chains for operator-facing output
//!
//! Hard errors always map to exit code 3. Soft failures are not errors and never
//! pass through this module.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_check_error, categorize_reqwest_error, render_error_chain};
pub use types::{CheckError, ErrorType, InitializationError};
