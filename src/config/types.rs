//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_GEOLOCATION_URL, DEFAULT_IP_LOOKUP_URL, DEFAULT_PASS_TIMES_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the three lookups are chained together.
///
/// Both styles run the same stages in the same order and report the same errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrchestrationStyle {
    /// Await each stage in turn and return the result (default)
    Async,
    /// Spawn the run and receive the result through a completion callback
    Callback,
}

/// Format of the pass list printed by the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One "Next pass at ..." line per pass window
    Plain,
    /// The pass list as a JSON array
    Json,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary; library users can build it directly with
/// `..Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use iss_spotter::Config;
///
/// let config = Config {
///     ip: Some("99.246.181.44".to_string()),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// ```bash
/// # Resolve everything from your own public IP
/// iss_spotter
///
/// # Skip the IP lookup and use a known address
/// iss_spotter --ip 99.246.181.44 --output json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iss_spotter",
    about = "Finds your approximate location from your public IP and lists upcoming ISS passes."
)]
pub struct Config {
    /// Known public IP address (skips the IP lookup stage)
    #[arg(long, env = "ISS_SPOTTER_IP")]
    pub ip: Option<String>,

    /// Orchestration style: async|callback
    #[arg(long, value_enum, default_value_t = OrchestrationStyle::Async)]
    pub style: OrchestrationStyle,

    /// Output format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Public IP lookup endpoint
    #[arg(long, env = "ISS_SPOTTER_IP_LOOKUP_URL", default_value = DEFAULT_IP_LOOKUP_URL)]
    pub ip_lookup_url: String,

    /// IP geolocation endpoint (the IP is appended as a path segment)
    #[arg(long, env = "ISS_SPOTTER_GEOLOCATION_URL", default_value = DEFAULT_GEOLOCATION_URL)]
    pub geolocation_url: String,

    /// ISS pass-time endpoint (queried with `lat` and `lon`)
    #[arg(long, env = "ISS_SPOTTER_PASS_TIMES_URL", default_value = DEFAULT_PASS_TIMES_URL)]
    pub pass_times_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: None,
            style: OrchestrationStyle::Async,
            output: OutputFormat::Plain,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            pass_times_url: DEFAULT_PASS_TIMES_URL.to_string(),
        }
    }
}

impl Config {
    /// Checks the configuration for values that would make every run fail.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "must not be empty",
            ));
        }
        if let Some(ip) = &self.ip {
            if ip.trim().is_empty() {
                return Err(ConfigValidationError::new(
                    "ip",
                    "must not be blank when provided",
                ));
            }
        }

        validate_endpoint("ip_lookup_url", &self.ip_lookup_url)?;
        validate_endpoint("geolocation_url", &self.geolocation_url)?;
        validate_endpoint("pass_times_url", &self.pass_times_url)?;
        Ok(())
    }
}

fn validate_endpoint(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    let url = Url::parse(value).map_err(|e| {
        ConfigValidationError::new(field, format!("'{value}' is not a valid URL: {e}"))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigValidationError::new(
            field,
            format!("scheme must be http or https, got '{other}'"),
        )),
    }
}
