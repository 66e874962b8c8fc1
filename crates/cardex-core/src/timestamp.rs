//! Timestamps embedded in export file names.

use chrono::{Local, NaiveDateTime};

/// Layout of the timestamp token, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Formats a local wall-clock time as `YYYYMMDD-HHMMSS`.
#[must_use]
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
