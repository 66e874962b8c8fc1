//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

use cardex_test::component::date::DateZone;
use cardex_test::component::export::{ExportOptions, FilenameScheme};
use chrono::{NaiveDate, NaiveDateTime};

/// Fixed export time so file names are predictable.
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(14, 30, 9))
        .expect("valid timestamp")
}

pub fn options() -> ExportOptions {
    ExportOptions {
        zone: DateZone::Local,
        filename: FilenameScheme::default(),
        timestamp: fixed_timestamp(),
    }
}

/// Writes `content` to `name` inside `dir` and returns the path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write input file");
    path
}
