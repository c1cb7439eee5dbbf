//! HTTP client initialization.
//!
//! This module builds the single HTTP client shared by all stages of a run.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for all three lookups.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
/// - Rustls TLS backend (no native TLS)
///
/// The client holds a connection pool behind an `Arc`, so clones are cheap and
/// concurrent runs can share one instance without sharing any per-run state.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
