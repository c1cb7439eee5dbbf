//! Error categorization.
//!
//! This module maps `reqwest` errors onto [`TransportFailure`] categories so
//! transport failures can be logged and reported consistently.

use super::types::TransportFailure;

/// Categorizes a `reqwest::Error` into a `TransportFailure`.
///
/// Timeouts are checked before connection errors because a connect timeout
/// reports both.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportFailure {
    if error.is_builder() {
        TransportFailure::Builder
    } else if error.is_redirect() {
        TransportFailure::Redirect
    } else if error.is_timeout() {
        TransportFailure::Timeout
    } else if error.is_connect() {
        TransportFailure::Connect
    } else if error.is_body() || error.is_decode() {
        TransportFailure::Body
    } else if error.is_request() {
        TransportFailure::Request
    } else {
        TransportFailure::Other
    }
}

impl From<&reqwest::Error> for TransportFailure {
    fn from(error: &reqwest::Error) -> Self {
        categorize_reqwest_error(error)
    }
}
