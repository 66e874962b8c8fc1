//! Spreadsheet rows to contact files.
//!
//! ## Summary
//! [`pipeline::run`] drops the header row, builds a [`ContactRecord`] for each
//! remaining row, filters out rows with no name, phone or email, and hands
//! the survivors to the serializer for the requested format.

pub mod csv;
pub mod pipeline;
pub mod record;
pub mod vcf;

pub use pipeline::{ExportOptions, ExportResult, FilenameScheme, run};
pub use record::ContactRecord;
