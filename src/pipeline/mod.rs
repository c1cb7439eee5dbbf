//! Orchestration of the three lookups.
//!
//! Both orchestration styles go through [`run_stages`], so they cannot differ
//! in ordering or in which error they report:
//!
//! - [`SpotterClient::next_pass_times`] awaits the stages in turn and returns the result.
//! - [`SpotterClient::next_pass_times_with_callback`] spawns the same run and hands
//!   the result to a completion callback.
//!
//! A stage starts only after the previous one has produced its value. The first
//! failure ends the run; later stages are not invoked and nothing produced so
//! far is returned.

use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::error_handling::PipelineError;
use crate::fetch::SpotterClient;
use crate::models::{IpAddress, PassTimeList};

/// IP lookup (unless `ip` is supplied), then geolocation, then pass times.
async fn run_stages(
    client: &SpotterClient,
    ip: Option<IpAddress>,
) -> Result<PassTimeList, PipelineError> {
    let ip = match ip {
        Some(ip) => {
            debug!("Using supplied IP {}, skipping IP lookup", ip);
            ip
        }
        None => client.fetch_my_ip().await?,
    };
    let coords = client.fetch_coords_by_ip(&ip).await?;
    client.fetch_pass_times(&coords).await
}

impl SpotterClient {
    /// Resolves the upcoming ISS passes for the caller's location.
    ///
    /// With `ip: None` the caller's public IP is looked up first; with a known
    /// IP that stage is skipped.
    ///
    /// # Errors
    ///
    /// Returns the first [`PipelineError`] raised by any stage, unchanged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use iss_spotter::{Config, SpotterClient};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SpotterClient::from_config(&Config::default())?;
    /// for pass in client.next_pass_times(None).await? {
    ///     println!("{} for {}s", pass.risetime, pass.duration);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn next_pass_times(&self, ip: Option<&str>) -> Result<PassTimeList, PipelineError> {
        let result = run_stages(self, ip.map(str::to_string)).await;
        if let Err(e) = &result {
            warn!("{} ({})", e, e.kind());
        }
        result
    }

    /// Callback form of [`SpotterClient::next_pass_times`].
    ///
    /// Spawns the run on the current Tokio runtime and calls `callback` exactly
    /// once with the outcome. The returned handle completes after the callback
    /// has returned.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn next_pass_times_with_callback<F>(&self, ip: Option<IpAddress>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<PassTimeList, PipelineError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = client.next_pass_times(ip.as_deref()).await;
            callback(result);
        })
    }
}
