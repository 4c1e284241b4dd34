//! Date/time utilities for msgcat.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Format a DateTime<Utc> to the specified timezone.
///
/// # Arguments
///
/// * `dt` - DateTime in UTC
/// * `timezone` - Timezone name (e.g., "Asia/Jerusalem", "UTC")
/// * `format` - Output format string (e.g., "%Y-%m-%d")
///
/// # Returns
///
/// Formatted datetime string. An unknown timezone falls back to UTC, and a
/// format chrono cannot render falls back to RFC 3339.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let mut out = String::new();
    let written = match timezone.parse::<Tz>() {
        Ok(tz) => write!(out, "{}", dt.with_timezone(&tz).format(format)),
        Err(_) => write!(out, "{}", dt.format(format)),
    };
    match written {
        Ok(()) => out,
        Err(_) => dt.to_rfc3339(),
    }
}
