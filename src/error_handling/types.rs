//! Error type definitions.
//!
//! This module defines the error types used throughout the application: pipeline
//! failures, initialization failures, and configuration validation failures.

use std::fmt;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A configuration value that cannot work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field, as spelled in [`crate::Config`]
    pub field: &'static str,
    /// What is wrong with the value and what is expected instead
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Stage {
    /// Public IP discovery
    IpLookup,
    /// IP-to-coordinates geolocation
    Geolocation,
    /// Coordinates-to-pass-times lookup
    PassTimes,
}

impl Stage {
    /// Human-readable stage name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::IpLookup => "IP lookup",
            Stage::Geolocation => "Geolocation",
            Stage::PassTimes => "Pass-time lookup",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad category of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorKind {
    /// The network call itself could not complete
    TransportError,
    /// A response arrived but its body has an unexpected shape
    DecodeError,
    /// The remote service answered and reported a failure
    RemoteError,
}

impl ErrorKind {
    /// Lowercase label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TransportError => "transport error",
            ErrorKind::DecodeError => "decode error",
            ErrorKind::RemoteError => "remote error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finer classification of a transport failure, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportFailure {
    /// The per-request deadline passed
    Timeout,
    /// No connection could be established
    Connect,
    /// The request failed after connecting
    Request,
    /// The response body could not be read
    Body,
    /// Too many redirects or a redirect loop
    Redirect,
    /// The URL or request was invalid
    Builder,
    /// Anything else
    Other,
}

impl TransportFailure {
    /// Short description used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportFailure::Timeout => "request timed out",
            TransportFailure::Connect => "connection failed",
            TransportFailure::Request => "request could not be sent",
            TransportFailure::Body => "response body could not be read",
            TransportFailure::Redirect => "redirect policy violated",
            TransportFailure::Builder => "request could not be built",
            TransportFailure::Other => "network error",
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error a pipeline run can end with.
///
/// Every variant names the [`Stage`] that failed. Stages never recover from
/// their own errors, so the first one raised is the one the caller sees.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The request could not be completed (DNS, connect, timeout, body read).
    #[error("{stage} failed: {}: {source}", TransportFailure::from(.source))]
    Transport {
        /// Stage whose request failed
        stage: Stage,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The response body does not have the expected structure.
    #[error("{stage} failed: could not decode response: {message}")]
    Decode {
        /// Stage whose response could not be decoded
        stage: Stage,
        /// Parser error and the start of the body
        message: String,
    },

    /// The service responded but signaled failure, through its HTTP status or
    /// through a failure flag in the payload.
    #[error("{stage} failed{}: {message}", describe_status(.status))]
    Remote {
        /// Stage whose service reported the failure
        stage: Stage,
        /// HTTP status, when the failure was signaled by status rather than payload
        status: Option<u16>,
        /// Diagnostic message, including the service's own message or body
        message: String,
    },
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status code {code}"),
        None => String::new(),
    }
}

impl PipelineError {
    pub(crate) fn transport(stage: Stage, source: ReqwestError) -> Self {
        PipelineError::Transport { stage, source }
    }

    pub(crate) fn decode(stage: Stage, message: impl Into<String>) -> Self {
        PipelineError::Decode {
            stage,
            message: message.into(),
        }
    }

    pub(crate) fn remote(stage: Stage, status: Option<u16>, message: impl Into<String>) -> Self {
        PipelineError::Remote {
            stage,
            status,
            message: message.into(),
        }
    }

    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Transport { stage, .. }
            | PipelineError::Decode { stage, .. }
            | PipelineError::Remote { stage, .. } => *stage,
        }
    }

    /// The category of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Transport { .. } => ErrorKind::TransportError,
            PipelineError::Decode { .. } => ErrorKind::DecodeError,
            PipelineError::Remote { .. } => ErrorKind::RemoteError,
        }
    }

    /// HTTP status reported by the remote service, if the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PipelineError::Remote { status, .. } => *status,
            PipelineError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            PipelineError::Decode { .. } => None,
        }
    }
}
