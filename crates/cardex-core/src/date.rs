//! Release date normalization.
//!
//! ## Summary
//! Turns the loosely typed release cell into a canonical `YYYY-MM-DD` string.
//! Structured dates are formatted directly; text goes through a small set of
//! recognized layouts and is otherwise passed through untouched.
//!
//! Slash or dash dates are read as `MM/DD` whenever the first part is at most
//! 12, so a `DD/MM` date with a day of 12 or less is misread. Existing
//! spreadsheets rely on that reading, keep it.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use regex_lite::Regex;

use crate::error::{CoreError, CoreResult};
use crate::types::CellValue;

#[expect(clippy::unwrap_used)]
static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

#[expect(clippy::unwrap_used)]
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}$").unwrap());

/// Zone in which the calendar fields of a date-time cell are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateZone {
    /// The process local zone.
    #[default]
    Local,
    /// A named IANA zone.
    Named(Tz),
}

impl DateZone {
    /// ## Summary
    /// Resolves an optional IANA zone name; `None` or a blank name means local.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidTimeZone` for names `chrono-tz` does not know.
    pub fn from_name(name: Option<&str>) -> CoreResult<Self> {
        match name.map(str::trim) {
            None | Some("") => Ok(Self::Local),
            Some(name) => name.parse(),
        }
    }

    /// Calendar date of `instant` in this zone.
    #[must_use]
    pub fn calendar_date(self, instant: &DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => instant.with_timezone(&Local).date_naive(),
            Self::Named(tz) => instant.with_timezone(&tz).date_naive(),
        }
    }
}

impl FromStr for DateZone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_err| CoreError::InvalidTimeZone(s.to_string()))
    }
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Normalizes a release cell to `YYYY-MM-DD`.
///
/// Returns an empty string for empty cells and the trimmed text for
/// layouts that are not recognized.
#[must_use]
pub fn normalize(value: &CellValue, zone: DateZone) -> String {
    match value {
        CellValue::Date(date) => format_date(*date),
        CellValue::DateTime(instant) => format_date(zone.calendar_date(instant)),
        CellValue::Empty | CellValue::Text(_) | CellValue::Number(_) => {
            normalize_text(&value.as_text(zone))
        }
    }
}

/// Normalizes a textual date.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let text = raw.trim();

    if text.is_empty() || CANONICAL.is_match(text) {
        return text.to_string();
    }

    if !NUMERIC.is_match(text) {
        tracing::debug!(value = %text, "Unrecognized date layout, passing through");
        return text.to_string();
    }

    let parts: Vec<&str> = text.split(['/', '-']).collect();
    let [first, second, year] = parts.as_slice() else {
        return text.to_string();
    };

    let month_first = first.len() <= 2 && first.parse::<u32>().is_ok_and(|value| value <= 12);
    let (month, day) = if month_first {
        (*first, *second)
    } else {
        (*second, *first)
    };

    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        (*year).to_string()
    };

    format!("{year}-{month:0>2}-{day:0>2}")
}
