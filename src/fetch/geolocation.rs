//! IP-to-coordinates geolocation.
//!
//! The geolocation service answers most lookups with HTTP 200 and reports the
//! outcome in a `success` flag inside the payload. That flag is authoritative:
//! `success: false` fails the stage even though the request itself succeeded.

use log::debug;
use serde::Deserialize;

use super::response::{decode, send};
use super::SpotterClient;
use crate::error_handling::{PipelineError, Stage};
use crate::models::Coordinates;

#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    success: bool,
    message: Option<String>,
    ip: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl SpotterClient {
    /// Resolves an IP address to approximate coordinates.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request cannot be completed
    /// - `Remote` if the payload says `success: false`; the message carries the
    ///   service's own message and the IP that was looked up
    /// - `Remote` with the status code if an HTTP error status comes back with a
    ///   body that is not a geolocation payload
    /// - `Decode` if a success response is not valid JSON or lacks coordinates
    pub async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates, PipelineError> {
        let stage = Stage::Geolocation;
        let url = self.endpoints.geolocation_for(ip);
        let response = send(&self.http, stage, self.http.get(&url)).await?;

        let payload: GeolocationResponse = decode(stage, &response.body).map_err(|err| {
            if response.status.is_success() {
                err
            } else {
                response.status_error(stage)
            }
        })?;

        if !payload.success {
            return Err(PipelineError::remote(stage, None, lookup_failure_message(&payload, ip)));
        }

        match (payload.latitude, payload.longitude) {
            (Some(latitude), Some(longitude)) => {
                debug!("{}: {} is at ({}, {})", stage, ip, latitude, longitude);
                Ok(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => Err(PipelineError::decode(
                stage,
                format!("success response for IP {ip} is missing latitude or longitude"),
            )),
        }
    }
}

fn lookup_failure_message(payload: &GeolocationResponse, queried_ip: &str) -> String {
    let server_message = payload.message.as_deref().unwrap_or("(no message)");
    let mut message = format!(
        "Success status was false. Server message says: {} when fetching for IP {}",
        server_message,
        payload.ip.as_deref().unwrap_or(queried_ip)
    );
    if payload.ip.as_deref().is_some_and(|reported| reported != queried_ip) {
        message.push_str(&format!(" (queried {queried_ip})"));
    }
    message
}
