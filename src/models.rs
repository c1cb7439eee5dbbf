//! Values handed from one pipeline stage to the next.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public IP address as reported by the lookup service (e.g. `"99.246.181.44"`).
///
/// Not validated locally; the geolocation service decides what it accepts.
pub type IpAddress = String;

/// Approximate position resolved from an IP address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Degrees north of the equator
    pub latitude: f64,
    /// Degrees east of the prime meridian
    pub longitude: f64,
}

/// One predicted ISS pass over a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassWindow {
    /// Start of the pass, in seconds since the Unix epoch
    pub risetime: i64,
    /// Length of the pass in seconds
    pub duration: u64,
}

impl PassWindow {
    /// Start of the pass as a UTC timestamp, or `None` if `risetime` is out of range.
    pub fn rise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.risetime, 0)
    }

    /// Length of the pass.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}

/// Upcoming passes, in the order the pass-time service returned them.
pub type PassTimeList = Vec<PassWindow>;
