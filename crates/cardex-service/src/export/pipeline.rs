//! Export orchestration.

use cardex_core::config::ExportConfig;
use cardex_core::constants::{FILENAME_PREFIX, FILENAME_TOKEN};
use cardex_core::date::DateZone;
use cardex_core::error::{CoreError, CoreResult};
use cardex_core::timestamp::format_timestamp;
use cardex_core::types::{ExportFormat, RawRow};
use chrono::NaiveDateTime;

use super::record::{self, ContactRecord};
use super::{csv, vcf};
use crate::error::{ServiceError, ServiceResult};

/// How output files are named: `<prefix>-<token>-<YYYYMMDD-HHMMSS>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameScheme {
    pub prefix: String,
    pub token: String,
}

impl Default for FilenameScheme {
    fn default() -> Self {
        Self {
            prefix: FILENAME_PREFIX.to_string(),
            token: FILENAME_TOKEN.to_string(),
        }
    }
}

impl FilenameScheme {
    /// ## Summary
    /// Creates a scheme from configured name parts.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if a part is blank or contains a
    /// path separator, since the name must stay inside the output directory.
    pub fn new(prefix: &str, token: &str) -> CoreResult<Self> {
        for part in [prefix, token] {
            if part.trim().is_empty() || part.contains(['/', '\\']) {
                return Err(CoreError::InvalidInput(format!(
                    "file name part {part:?} must be non-blank and contain no path separators"
                )));
            }
        }

        Ok(Self {
            prefix: prefix.to_string(),
            token: token.to_string(),
        })
    }

    /// The part of the name before the timestamp.
    #[must_use]
    pub fn stem(&self) -> String {
        format!("{}-{}", self.prefix, self.token)
    }

    /// Builds a file name for `format` stamped with `at`.
    #[must_use]
    pub fn file_name(&self, format: ExportFormat, at: NaiveDateTime) -> String {
        format!(
            "{}-{}.{}",
            self.stem(),
            format_timestamp(at),
            format.extension()
        )
    }
}

/// Inputs of one export besides the rows themselves.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Zone used to read calendar fields from date-time cells.
    pub zone: DateZone,
    pub filename: FilenameScheme,
    /// Local wall-clock time of the export; the only non-deterministic input.
    pub timestamp: NaiveDateTime,
}

impl ExportOptions {
    /// ## Summary
    /// Builds options from the export configuration.
    ///
    /// ## Errors
    /// - `CoreError::InvalidTimeZone` if the configured zone is unknown.
    /// - `CoreError::InvalidInput` if a file name part is unusable.
    pub fn from_config(config: &ExportConfig, timestamp: NaiveDateTime) -> CoreResult<Self> {
        Ok(Self {
            zone: config.zone()?,
            filename: FilenameScheme::new(&config.filename_prefix, &config.filename_token)?,
            timestamp,
        })
    }
}

/// A finished export, ready to be written under `suggested_filename`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub content: String,
    pub suggested_filename: String,
    pub format: ExportFormat,
    /// Number of contacts written.
    pub contacts: usize,
}

/// Serializes records in the given format.
#[must_use]
pub fn serialize(format: ExportFormat, records: &[ContactRecord]) -> String {
    match format {
        ExportFormat::Csv => csv::serialize(records),
        ExportFormat::Vcf => vcf::serialize(records),
    }
}

/// Output that means "nothing to export" for the given format.
#[must_use]
pub fn empty_baseline(format: ExportFormat) -> String {
    match format {
        ExportFormat::Csv => csv::empty_baseline(),
        ExportFormat::Vcf => String::new(),
    }
}

/// ## Summary
/// Runs one export over a sheet.
///
/// The first row is always treated as column labels and skipped. Rows
/// without a name, phone or email are dropped.
///
/// ## Errors
/// - `ServiceError::NoInputRows` if there is no row beyond the header.
/// - `ServiceError::EmptyResult` if no row holds contact data.
#[tracing::instrument(skip(rows, options), fields(rows = rows.len()))]
pub fn run(
    rows: &[RawRow],
    format: ExportFormat,
    options: &ExportOptions,
) -> ServiceResult<ExportResult> {
    let Some((_header, data)) = rows.split_first().filter(|(_, data)| !data.is_empty()) else {
        tracing::warn!("No data rows after the header");
        return Err(ServiceError::NoInputRows);
    };

    let prepared = record::prepare(data, options.zone);
    let content = serialize(format, &prepared.records);

    if content == empty_baseline(format) {
        tracing::warn!(skipped = prepared.skipped, "No contact data to export");
        return Err(ServiceError::EmptyResult);
    }

    let suggested_filename = options.filename.file_name(format, options.timestamp);

    tracing::info!(
        contacts = prepared.records.len(),
        skipped = prepared.skipped,
        file = %suggested_filename,
        "Export built"
    );

    Ok(ExportResult {
        content,
        suggested_filename,
        format,
        contacts: prepared.records.len(),
    })
}
