//! Coordinates-to-pass-times lookup.

use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use super::response::{decode, send};
use super::SpotterClient;
use crate::error_handling::{PipelineError, Stage};
use crate::models::{Coordinates, PassTimeList, PassWindow};

/// Value of `message` in a payload that reports a failed prediction.
const FAILURE_MESSAGE: &str = "failure";

#[derive(Debug, Deserialize)]
struct PassTimesResponse {
    message: Option<String>,
    reason: Option<String>,
    response: Option<Vec<PassWindow>>,
}

impl SpotterClient {
    /// Fetches the upcoming ISS passes over `coords`.
    ///
    /// The list is returned exactly as the service ordered it.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request cannot be completed
    /// - `Remote` with the status code and body on any status other than 200
    /// - `Remote` if the payload reports `"message": "failure"`
    /// - `Decode` if the `response` list is missing or malformed
    pub async fn fetch_pass_times(
        &self,
        coords: &Coordinates,
    ) -> Result<PassTimeList, PipelineError> {
        let stage = Stage::PassTimes;
        let request = self.http.get(&self.endpoints.pass_times_url).query(&[
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
        ]);
        let response = send(&self.http, stage, request).await?;

        if response.status != StatusCode::OK {
            return Err(response.status_error(stage));
        }

        let payload: PassTimesResponse = decode(stage, &response.body)?;
        match payload.response {
            Some(passes) => {
                debug!("{}: {} upcoming passes", stage, passes.len());
                Ok(passes)
            }
            None if payload.message.as_deref() == Some(FAILURE_MESSAGE) => {
                Err(PipelineError::remote(
                    stage,
                    None,
                    format!(
                        "service reported failure: {}",
                        payload.reason.as_deref().unwrap_or("(no reason given)")
                    ),
                ))
            }
            None => Err(PipelineError::decode(stage, "missing field `response`")),
        }
    }
}
