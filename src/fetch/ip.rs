//! Public IP discovery.

use log::debug;
use serde::Deserialize;

use super::response::{decode, send};
use super::SpotterClient;
use crate::error_handling::{PipelineError, Stage};
use crate::models::IpAddress;

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

impl SpotterClient {
    /// Asks the IP lookup service for the caller's public IP address.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request cannot be completed
    /// - `Remote` with the status code and body on a non-success HTTP status
    /// - `Decode` if the body is not `{"ip": "<string>"}`
    pub async fn fetch_my_ip(&self) -> Result<IpAddress, PipelineError> {
        let stage = Stage::IpLookup;
        let response = send(&self.http, stage, self.http.get(&self.endpoints.ip_lookup_url)).await?;

        if !response.status.is_success() {
            return Err(response.status_error(stage));
        }

        let payload: IpResponse = decode(stage, &response.body)?;
        debug!("{}: public IP is {}", stage, payload.ip);
        Ok(payload.ip)
    }
}
