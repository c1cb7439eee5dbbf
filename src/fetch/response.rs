//! Response handling shared by all three stages.
//!
//! Each stage sends exactly one GET request, reads the whole body as text, and
//! then decides from the status and the body whether the stage succeeded.

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::MAX_ERROR_BODY_CHARS;
use crate::error_handling::{categorize_reqwest_error, PipelineError, Stage};

/// A response whose body has been read in full.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: String,
}

impl RawResponse {
    /// Builds the `Remote` error reported for an unexpected HTTP status.
    pub(crate) fn status_error(&self, stage: Stage) -> PipelineError {
        PipelineError::remote(
            stage,
            Some(self.status.as_u16()),
            format!(
                "Status Code {} when calling the service. Response: {}",
                self.status,
                truncate_body(&self.body)
            ),
        )
    }
}

/// Sends a request and reads its body.
///
/// Any failure before the body has been read completely is a transport failure.
/// The status code is not inspected here.
pub(crate) async fn send(
    client: &reqwest::Client,
    stage: Stage,
    request: reqwest::RequestBuilder,
) -> Result<RawResponse, PipelineError> {
    let request = request
        .build()
        .map_err(|e| PipelineError::transport(stage, e))?;
    debug!("{}: GET {}", stage, request.url());

    let response = client.execute(request).await.map_err(|e| {
        debug!("{}: {} ({})", stage, categorize_reqwest_error(&e), e);
        PipelineError::transport(stage, e)
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        debug!("{}: {} ({})", stage, categorize_reqwest_error(&e), e);
        PipelineError::transport(stage, e)
    })?;
    debug!("{}: received {} ({} bytes)", stage, status, body.len());

    Ok(RawResponse { status, body })
}

/// Parses a JSON body into `T`, reporting failures as `Decode` errors.
pub(crate) fn decode<T: DeserializeOwned>(stage: Stage, body: &str) -> Result<T, PipelineError> {
    serde_json::from_str(body).map_err(|e| {
        PipelineError::decode(
            stage,
            format!("{}. Response: {}", e, truncate_body(body)),
        )
    })
}

/// Shortens a response body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
