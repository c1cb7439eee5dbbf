//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including default endpoints, timeouts, and size limits.

// Remote endpoints
/// Public IP lookup service. Responds with `{"ip": "..."}`.
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";
/// IP geolocation service. The IP address is appended as the last path segment.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipwho.is";
/// ISS flyover prediction service. Queried with `lat` and `lon` parameters.
pub const DEFAULT_PASS_TIMES_URL: &str = "https://iss-flyover.herokuapp.com/json/";

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted for `--timeout-seconds`
pub const MAX_TIMEOUT_SECS: u64 = 300;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("iss_spotter/", env!("CARGO_PKG_VERSION"));

/// Maximum number of characters of a remote response body kept in an error message.
///
/// Error pages can be large HTML documents; only the head is useful for diagnostics.
pub const MAX_ERROR_BODY_CHARS: usize = 512;
