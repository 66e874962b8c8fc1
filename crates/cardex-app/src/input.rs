//! Sheet readers.
//!
//! ## Summary
//! Turns an input file into a grid of [`CellValue`]s. The first row is kept
//! as data; deciding that it is a header is the pipeline's job.

use std::io::Read;
use std::path::Path;

use cardex_core::types::{CellValue, RawRow};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Supported input file kinds, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Csv,
    Json,
}

impl InputKind {
    /// ## Summary
    /// Detects the kind from the file extension (case-insensitive).
    ///
    /// ## Errors
    /// Returns `AppError::UnsupportedInput` for any other extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(AppError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// A JSON cell. Unknown shapes fail to deserialize.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCell {
    Null,
    Text(String),
    Number(f64),
    Date { date: NaiveDate },
    DateTime { datetime: DateTime<Utc> },
}

impl From<JsonCell> for CellValue {
    fn from(cell: JsonCell) -> Self {
        match cell {
            JsonCell::Null => Self::Empty,
            JsonCell::Text(s) => Self::from_field(&s),
            JsonCell::Number(n) => Self::Number(n),
            JsonCell::Date { date } => Self::Date(date),
            JsonCell::DateTime { datetime } => Self::DateTime(datetime),
        }
    }
}

/// ## Summary
/// Parses CSV text into rows of cells.
///
/// Rows may have different lengths. Blank fields become `Empty`, everything
/// else is `Text`.
///
/// ## Errors
/// Returns `AppError::Csv` on malformed input.
pub fn parse_csv(reader: impl Read) -> AppResult<Vec<Vec<CellValue>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from_field).collect());
    }

    Ok(rows)
}

/// ## Summary
/// Parses a JSON array of rows.
///
/// ## Errors
/// Returns `AppError::Json` if the document is not an array of arrays of
/// supported cells.
pub fn parse_json(text: &str) -> AppResult<Vec<Vec<CellValue>>> {
    let rows: Vec<Vec<JsonCell>> = serde_json::from_str(text)?;

    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(CellValue::from).collect())
        .collect())
}

/// ## Summary
/// Reads a whole input file as a grid.
///
/// ## Errors
/// Fails on unsupported extensions, unreadable files and malformed content.
#[tracing::instrument]
pub fn read_grid(path: &Path) -> AppResult<Vec<Vec<CellValue>>> {
    let kind = InputKind::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;

    let rows = match kind {
        InputKind::Csv => parse_csv(text.as_bytes())?,
        InputKind::Json => parse_json(&text)?,
    };

    tracing::debug!(rows = rows.len(), ?kind, "Input read");

    Ok(rows)
}

/// ## Summary
/// Reads an input file as contact rows, padded or truncated to eight cells.
///
/// ## Errors
/// See [`read_grid`].
pub fn read_rows(path: &Path) -> AppResult<Vec<RawRow>> {
    Ok(read_grid(path)?.into_iter().map(RawRow::new).collect())
}
