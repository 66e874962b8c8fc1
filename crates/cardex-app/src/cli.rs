//! Command line interface.

use std::path::{Path, PathBuf};

use cardex_core::config::Settings;
use cardex_core::timestamp::now_local;
use cardex_core::types::ExportFormat;
use cardex_service::cleanup::{Selection, clean_grid};
use cardex_service::export::{self, ExportOptions};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{AppError, AppResult};
use crate::{input, output};

/// Reminder printed after a CSV export; the contacts importer files
/// everything under its own "Imported" label.
pub const CSV_IMPORT_NOTICE: &str = "After import, rename the \"Imported\" label to \"Service\".";

#[derive(Debug, Parser)]
#[command(author, version, about = "Export a contact sheet to CSV or vCard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export contacts from a CSV or JSON sheet
    Export(ExportArgs),
    /// Strip everything but digits from phone cells of a CSV or JSON sheet
    Digits(DigitsArgs),
}

#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Input sheet; its first row is treated as column labels
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value_t = FormatChoice::Both)]
    pub format: FormatChoice,
    /// Overrides `export.output_dir`
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// IANA zone for date-time cells; overrides `export.time_zone`
    #[arg(long)]
    pub time_zone: Option<String>,
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, clap::Args)]
pub struct DigitsArgs {
    pub input: PathBuf,
    /// Where to write the cleaned CSV; defaults to `<input>.digits.csv`
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// One-based column to clean; repeat for several. All columns when omitted
    #[arg(short, long = "column", value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: Vec<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    Csv,
    Vcf,
    Both,
}

impl FormatChoice {
    #[must_use]
    pub fn formats(self) -> &'static [ExportFormat] {
        match self {
            Self::Csv => &[ExportFormat::Csv],
            Self::Vcf => &[ExportFormat::Vcf],
            Self::Both => &[ExportFormat::Csv, ExportFormat::Vcf],
        }
    }
}

/// ## Summary
/// Runs the export subcommand and returns the user-facing notices.
///
/// ## Errors
/// Fails on unreadable input, pipeline notices (`ServiceError`) and write errors.
pub fn run_export(args: &ExportArgs, settings: &Settings) -> AppResult<Vec<String>> {
    run_export_at(args, settings, now_local())
}

/// ## Summary
/// Runs the export subcommand with a fixed export timestamp.
///
/// Every requested format is built and every target checked before anything
/// is written. If a later write still fails, files this run already wrote
/// are removed again, so a run either writes all its files or none.
///
/// ## Errors
/// Fails on unreadable input, pipeline notices (`ServiceError`) and write errors.
pub fn run_export_at(
    args: &ExportArgs,
    settings: &Settings,
    timestamp: NaiveDateTime,
) -> AppResult<Vec<String>> {
    let mut config = settings.export.clone();
    if let Some(zone) = &args.time_zone {
        config.time_zone = Some(zone.clone());
    }
    let options = ExportOptions::from_config(&config, timestamp)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let rows = input::read_rows(&args.input)?;

    let results = args
        .format
        .formats()
        .iter()
        .map(|format| export::run(&rows, *format, &options))
        .collect::<Result<Vec<_>, _>>()?;

    let taken = results
        .iter()
        .map(|result| output_dir.join(&result.suggested_filename))
        .find(|path| !args.force && path.exists());
    if let Some(taken) = taken {
        return Err(AppError::OutputExists(taken));
    }

    let mut written = Vec::new();
    let mut notices = Vec::new();
    for result in &results {
        let path = match output::write_export(&output_dir, result, args.force) {
            Ok(path) => path,
            Err(e) => {
                output::discard_written(&written);
                return Err(e);
            }
        };
        notices.push(format!(
            "Saved {} contact(s) to {}",
            result.contacts,
            path.display()
        ));
        if result.format == ExportFormat::Csv {
            notices.push(CSV_IMPORT_NOTICE.to_string());
        }
        written.push(path);
    }

    Ok(notices)
}

/// Default output path of the digits subcommand.
#[must_use]
pub fn digits_output_path(input: &Path) -> PathBuf {
    input.with_extension("digits.csv")
}

/// ## Summary
/// Runs the digits subcommand and returns the user-facing notice.
///
/// Nothing is written when no cell changed.
///
/// ## Errors
/// Fails on unreadable input or write errors.
pub fn run_digits(args: &DigitsArgs) -> AppResult<String> {
    let selection = if args.columns.is_empty() {
        Selection::All
    } else {
        Selection::Columns(
            args.columns
                .iter()
                .map(|column| usize::from(*column) - 1)
                .collect(),
        )
    };

    let grid = input::read_grid(&args.input)?;
    let report = clean_grid(grid, &selection);

    if report.modified == 0 {
        return Ok("No formatted phone numbers were found in the selected cells.".to_string());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| digits_output_path(&args.input));
    output::write_grid(&path, &report.rows)?;

    Ok(format!(
        "Cleaned {} cell(s) to raw digits only (e.g., 1234567890). Saved to {}",
        report.modified,
        path.display()
    ))
}
