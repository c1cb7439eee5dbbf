//! Pass list rendering for the command-line output.

use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::config::OutputFormat;
use crate::models::PassWindow;

/// Date format of a pass start, e.g. `Sat Jan 25 2020 01:49:10 GMT-0500`.
const RISE_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Formats one `Next pass at ... for N seconds!` line per window, in list order.
///
/// # Arguments
///
/// * `passes` - Pass windows as returned by the pipeline
/// * `tz` - Time zone the rise times are shown in
pub fn format_pass_times<Tz>(passes: &[PassWindow], tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    passes
        .iter()
        .map(|pass| {
            let rise = match pass.rise_time() {
                Some(rise) => rise.with_timezone(tz).format(RISE_TIME_FORMAT).to_string(),
                None => format!("epoch second {}", pass.risetime),
            };
            format!("Next pass at {} for {} seconds!", rise, pass.duration)
        })
        .collect()
}

/// Renders the pass list in the requested output format.
///
/// Plain output uses the local time zone.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn render_pass_times(
    passes: &[PassWindow],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(passes),
        OutputFormat::Plain if passes.is_empty() => {
            Ok("No upcoming ISS passes found for your location.".to_string())
        }
        OutputFormat::Plain => Ok(format_pass_times(passes, &Local).join("\n")),
    }
}
