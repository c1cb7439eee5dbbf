//! Error handling.
//!
//! This module provides:
//! - The pipeline error type and its stage/kind classification
//! - Transport error categorization
//! - Initialization and configuration errors
//!
//! Pipeline errors are categorized into:
//! - **Transport**: the request never completed
//! - **Decode**: the response body has an unexpected shape
//! - **Remote**: the service answered and reported a failure

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ConfigValidationError, ErrorKind, InitializationError, PipelineError, Stage, TransportFailure,
};
