//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iss_spotter` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use iss_spotter::app::render_pass_times;
use iss_spotter::initialization::init_logger_with;
use iss_spotter::{run_spotter, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Endpoint overrides and ISS_SPOTTER_IP may live in a .env file
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_spotter(&config).await {
        Ok(report) => {
            let output = render_pass_times(&report.passes, config.output)
                .context("Failed to format pass times")?;
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("iss_spotter error: {:#}", e);
            process::exit(1);
        }
    }
}
