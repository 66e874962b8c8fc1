use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::ROW_WIDTH;
use crate::date::{DateZone, format_date};

/// A single spreadsheet cell.
///
/// Spreadsheet sources hand over loosely typed values; the tag tells the
/// normalizers how to read each one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    /// Calendar date without a zone.
    Date(NaiveDate),
    /// Instant whose calendar fields depend on the configured zone.
    DateTime(DateTime<Utc>),
    Number(f64),
}

impl CellValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a `Text` cell, or `Empty` when the value is blank.
    #[must_use]
    pub fn from_field(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }

    /// ## Summary
    /// Renders the cell as text for the plain string columns.
    ///
    /// Zero and NaN count as blank, integral numbers drop their fractional
    /// part, and date cells render as canonical dates.
    #[must_use]
    pub fn as_text(&self, zone: DateZone) -> Cow<'_, str> {
        match self {
            Self::Empty => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Date(date) => Cow::Owned(format_date(*date)),
            Self::DateTime(instant) => Cow::Owned(format_date(zone.calendar_date(instant))),
            Self::Number(n) => Cow::Owned(format_number(*n)),
        }
    }
}

/// Spreadsheet-style number text. Magnitudes of 1e21 and above or tiny
/// fractions are written in Rust's positional form (`1e21` becomes
/// `1000000000000000000000`, `1e-7` becomes `0.0000001`) where a spreadsheet
/// would switch to exponent notation; phone and name columns never hold such
/// values.
fn format_number(n: f64) -> String {
    if n == 0.0 || n.is_nan() {
        String::new()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

/// Positional columns of a contact row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    FirstName,
    LastName,
    Zone,
    Stake,
    Release,
    Phone,
    Email,
}

impl Column {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One spreadsheet row: exactly eight cells in [`Column`] order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    cells: [CellValue; ROW_WIDTH],
}

impl RawRow {
    /// Builds a row from any number of cells, padding missing trailing
    /// cells with `Empty` and ignoring cells past the eighth.
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = CellValue>) -> Self {
        let mut row = Self::default();
        for (slot, cell) in row.cells.iter_mut().zip(cells) {
            *slot = cell;
        }
        row
    }

    #[must_use]
    pub const fn cell(&self, column: Column) -> &CellValue {
        &self.cells[column.index()]
    }

    #[must_use]
    pub const fn cells(&self) -> &[CellValue; ROW_WIDTH] {
        &self.cells
    }
}

impl FromIterator<CellValue> for RawRow {
    fn from_iter<I: IntoIterator<Item = CellValue>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Google contacts import CSV.
    Csv,
    /// vCard 3.0.
    Vcf,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Vcf => "vcf",
        }
    }

    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
