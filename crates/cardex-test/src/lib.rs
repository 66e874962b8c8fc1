//! Cardex contact exporter - integration test support.
//!
//! Re-exports the workspace crates under one root and provides shared sheet
//! fixtures.

pub mod component {
    pub use cardex_core::{config, constants, date, digits, timestamp, types};
    pub use cardex_service::{cleanup, export};

    // Both crates define their own error module
    pub mod error {
        pub use cardex_core::error::*;
        pub use cardex_service::error::*;
    }
}

pub use cardex_app as app;
pub use cardex_rfc as rfc;

pub mod fixtures {
    use cardex_core::types::{CellValue, RawRow};
    use chrono::NaiveDate;

    /// Column labels as they appear on the contact sheet.
    pub const HEADER_LABELS: [&str; 8] = [
        "Title", "First", "Last", "Zone", "Stake", "Release", "Phone", "Email",
    ];

    /// The same sheet as [`sample_rows`], as CSV text.
    pub const SAMPLE_CSV: &str = "\
Title,First,Last,Zone,Stake,Release,Phone,Email
Elder,John,Smith,North,Lake,03/05/2024,1234567890,j@example.com
,,,South,River,2024-06-01,,
Sister,Ann,O'Neil,East,Hill,13/05/24,(555) 010-0200,
";

    #[must_use]
    pub fn header_row() -> RawRow {
        HEADER_LABELS.into_iter().map(CellValue::text).collect()
    }

    /// Elder John Smith with a structured release date.
    ///
    /// # Panics
    /// Never; the date literal is valid.
    #[must_use]
    #[expect(clippy::expect_used)]
    pub fn smith_row() -> RawRow {
        RawRow::new([
            CellValue::text("Elder"),
            CellValue::text("John"),
            CellValue::text("Smith"),
            CellValue::text("North"),
            CellValue::text("Lake"),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date")),
            CellValue::text("1234567890"),
            CellValue::text("j@example.com"),
        ])
    }

    /// A row with only zone, stake and release filled in.
    #[must_use]
    pub fn extras_only_row() -> RawRow {
        RawRow::new([
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::text("South"),
            CellValue::text("River"),
            CellValue::text("2024-06-01"),
        ])
    }

    /// Header, Smith, an extras-only row and an empty row.
    #[must_use]
    pub fn sample_rows() -> Vec<RawRow> {
        vec![header_row(), smith_row(), extras_only_row(), RawRow::default()]
    }
}
