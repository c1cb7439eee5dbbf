//! The three remote lookups of the pipeline.
//!
//! Each stage is a method on [`SpotterClient`] that performs exactly one request
//! and either returns the value the next stage needs or a [`crate::PipelineError`]
//! naming the stage. Stages never retry and never recover from their own errors.
//!
//! - [`SpotterClient::fetch_my_ip`]: public IP discovery
//! - [`SpotterClient::fetch_coords_by_ip`]: IP-to-coordinates geolocation
//! - [`SpotterClient::fetch_pass_times`]: coordinates-to-pass-times lookup

mod geolocation;
mod ip;
mod pass_times;
mod response;

use crate::config::{
    Config, DEFAULT_GEOLOCATION_URL, DEFAULT_IP_LOOKUP_URL, DEFAULT_PASS_TIMES_URL,
};
use crate::error_handling::InitializationError;
use crate::initialization::init_client;

/// Where each stage sends its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Public IP lookup service, queried as-is
    pub ip_lookup_url: String,
    /// Geolocation base URL; the IP is appended as the last path segment
    pub geolocation_url: String,
    /// Pass-time service, queried with `lat` and `lon` parameters
    pub pass_times_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            pass_times_url: DEFAULT_PASS_TIMES_URL.to_string(),
        }
    }
}

impl From<&Config> for Endpoints {
    fn from(config: &Config) -> Self {
        Self {
            ip_lookup_url: config.ip_lookup_url.clone(),
            geolocation_url: config.geolocation_url.clone(),
            pass_times_url: config.pass_times_url.clone(),
        }
    }
}

impl Endpoints {
    /// URL of the geolocation lookup for one IP address.
    pub(crate) fn geolocation_for(&self, ip: &str) -> String {
        format!("{}/{}", self.geolocation_url.trim_end_matches('/'), ip.trim())
    }
}

/// Client for the three lookup services.
///
/// Holds only immutable data: the shared `reqwest::Client` and the endpoints.
/// Cloning is cheap, and every pipeline run owns the values it produces, so
/// concurrent runs never observe each other.
#[derive(Debug, Clone)]
pub struct SpotterClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl SpotterClient {
    /// Creates a client from an existing HTTP client and a set of endpoints.
    pub fn new(http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    /// Creates a client using the timeouts, user agent, and endpoints in `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_client(config)?, Endpoints::from(config)))
    }

    /// The endpoints this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[cfg(test)]
mod tests;
