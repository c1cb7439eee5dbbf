//! iss_spotter library: upcoming ISS passes for the caller's location
//!
//! This library resolves the caller's public IP address, geolocates it, and asks
//! a pass-prediction service when the International Space Station will next be
//! overhead. The three lookups run strictly one after another; the first failure
//! ends the run and is returned unchanged.
//!
//! # Example
//!
//! ```no_run
//! use iss_spotter::{run_spotter, Config};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     ip: Some("99.246.181.44".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_spotter(&config).await?;
//! for pass in &report.passes {
//!     println!("rises at {} for {}s", pass.risetime, pass.duration);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod pipeline;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OrchestrationStyle, OutputFormat};
pub use error_handling::{
    ConfigValidationError, ErrorKind, InitializationError, PipelineError, Stage, TransportFailure,
};
pub use fetch::{Endpoints, SpotterClient};
pub use models::{Coordinates, IpAddress, PassTimeList, PassWindow};
pub use run::{run_spotter, SpotReport};

// Internal run module (wires configuration, client, and orchestration together)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use tokio::sync::oneshot;

    use crate::config::{Config, OrchestrationStyle};
    use crate::fetch::SpotterClient;
    use crate::models::PassTimeList;

    /// Result of a completed run.
    #[derive(Debug, Clone)]
    pub struct SpotReport {
        /// IP address supplied by the caller, if the IP lookup was skipped
        pub ip_override: Option<String>,
        /// Orchestration style the run used
        pub style: OrchestrationStyle,
        /// Upcoming passes, in service order
        pub passes: PassTimeList,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the pipeline once with the provided configuration.
    ///
    /// Validates the configuration, builds the HTTP client, and resolves the
    /// upcoming passes using the configured [`OrchestrationStyle`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client cannot
    /// be built, or any pipeline stage fails. A stage failure is the
    /// [`crate::PipelineError`] itself and can be recovered with
    /// `err.downcast_ref::<PipelineError>()`.
    pub async fn run_spotter(config: &Config) -> Result<SpotReport> {
        config.validate().context("Invalid configuration")?;
        let client =
            SpotterClient::from_config(config).context("Failed to initialize HTTP client")?;

        let ip_override = config.ip.as_deref().map(|ip| ip.trim().to_string());
        let start = Instant::now();
        info!(
            "Looking up upcoming ISS passes ({:?} style{})",
            config.style,
            if ip_override.is_some() {
                ", IP supplied"
            } else {
                ""
            }
        );

        let passes = match config.style {
            OrchestrationStyle::Async => client.next_pass_times(ip_override.as_deref()).await?,
            OrchestrationStyle::Callback => {
                let (tx, rx) = oneshot::channel();
                client
                    .next_pass_times_with_callback(ip_override.clone(), move |result| {
                        // The receiver lives until the task has joined
                        let _ = tx.send(result);
                    })
                    .await
                    .context("Pipeline task failed")?;
                rx.await
                    .context("Pipeline finished without reporting a result")??
            }
        };

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Found {} upcoming pass{} in {:.2}s",
            passes.len(),
            if passes.len() == 1 { "" } else { "es" },
            elapsed_seconds
        );

        Ok(SpotReport {
            ip_override,
            style: config.style,
            passes,
            elapsed_seconds,
        })
    }
}
