//! Main application modules.
//!
//! This module provides the user-facing presentation of a run's result.

pub mod output;

// Re-export public API
pub use output::{format_pass_times, render_pass_times};
