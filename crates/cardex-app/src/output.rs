//! Output files.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use cardex_core::date::format_date;
use cardex_core::types::CellValue;
use cardex_service::export::ExportResult;
use chrono::SecondsFormat;
use tempfile::NamedTempFile;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Writes a finished export to `dir/<suggested_filename>`.
///
/// The content goes to a temporary file in `dir` first and is moved into
/// place only once fully written, so a failed write leaves nothing behind.
/// An existing file is only replaced when `force` is set.
///
/// ## Errors
/// - `AppError::OutputExists` if the target exists and `force` is false.
/// - `AppError::Io` if the directory or file cannot be written.
#[tracing::instrument(skip(result), fields(file = %result.suggested_filename))]
pub fn write_export(dir: &Path, result: &ExportResult, force: bool) -> AppResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;

    let path = dir.join(&result.suggested_filename);
    if !force && path.exists() {
        return Err(AppError::OutputExists(path));
    }

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| AppError::io(dir, e))?;
    staged
        .write_all(result.content.as_bytes())
        .map_err(|e| AppError::io(staged.path(), e))?;

    let persisted = if force {
        staged.persist(&path)
    } else {
        staged.persist_noclobber(&path)
    };
    persisted.map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            AppError::OutputExists(path.clone())
        } else {
            AppError::io(&path, e.error)
        }
    })?;

    tracing::info!(path = %path.display(), bytes = result.content.len(), "Export written");

    Ok(path)
}

/// Removes files written earlier in a run that is being abandoned.
pub fn discard_written(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => tracing::warn!(path = %path.display(), "Removed file of failed export"),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to remove file of failed export");
            }
        }
    }
}

/// Text of a cell as it was read, with nothing dropped.
///
/// Unlike the export rendering, zero stays `0` and date-times keep their
/// time of day.
fn raw_field(cell: &CellValue) -> Cow<'_, str> {
    match cell {
        CellValue::Empty => Cow::Borrowed(""),
        CellValue::Text(s) => Cow::Borrowed(s.as_str()),
        CellValue::Number(n) => Cow::Owned(n.to_string()),
        CellValue::Date(date) => Cow::Owned(format_date(*date)),
        CellValue::DateTime(instant) => {
            Cow::Owned(instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
    }
}

/// ## Summary
/// Writes a grid back out as CSV.
///
/// Cells the cleanup left alone are written back without loss: numbers in
/// full, dates as `YYYY-MM-DD` and date-times as RFC 3339.
///
/// ## Errors
/// Returns `AppError::Csv` or `AppError::Io` on write failures.
pub fn write_grid(path: &Path, rows: &[Vec<CellValue>]) -> AppResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)?;

    for row in rows {
        writer.write_record(row.iter().map(|cell| raw_field(cell).into_owned()))?;
    }

    writer.flush().map_err(|e| AppError::io(path, e))?;

    Ok(())
}
