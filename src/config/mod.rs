//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, limits)
//! - CLI option types and parsing
//! - Configuration validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OrchestrationStyle, OutputFormat};
