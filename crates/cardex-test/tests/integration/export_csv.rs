use cardex_test::app::input::read_rows;
use cardex_test::component::error::ServiceError;
use cardex_test::component::export::{csv::HEADER, run};
use cardex_test::component::types::{ExportFormat, RawRow};
use cardex_test::fixtures::{SAMPLE_CSV, extras_only_row, header_row, sample_rows, smith_row};

use crate::helpers::{options, write_input};

#[test_log::test]
fn structured_row_matches_google_layout() {
    let result = run(&[header_row(), smith_row()], ExportFormat::Csv, &options())
        .expect("export succeeds");

    let lines: Vec<&str> = result.content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER.join(","));
    assert_eq!(
        lines[1],
        "\"John\",\"Smith\",\"Elder\",\"1234567890\",\"j@example.com\",Home,Zone,\"North\",Stake,\"Lake\",Release,\"2024-03-05\""
    );
    assert_eq!(
        result.suggested_filename,
        "Contacts-Service-Missionary-20240305-143009.csv"
    );
}

#[test_log::test]
fn csv_sheet_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "sheet.csv", SAMPLE_CSV);

    let rows = read_rows(&path).expect("readable sheet");
    let result = run(&rows, ExportFormat::Csv, &options()).expect("export succeeds");

    assert_eq!(result.contacts, 2);
    assert_eq!(
        result.content,
        format!(
            "{}\n\
             \"John\",\"Smith\",\"Elder\",\"1234567890\",\"j@example.com\",Home,Zone,\"North\",Stake,\"Lake\",Release,\"2024-03-05\"\n\
             \"Ann\",\"O'Neil\",\"Sister\",\"(555) 010-0200\",\"\",Home,Zone,\"East\",Stake,\"Hill\",Release,\"2024-05-13\"\n",
            HEADER.join(",")
        )
    );
}

#[test]
fn quotes_inside_values_are_doubled() {
    let mut cells: Vec<_> = smith_row().cells().to_vec();
    cells[2] = cardex_test::component::types::CellValue::text("Smith \"Jr\"");
    let rows = [header_row(), RawRow::new(cells)];

    let result = run(&rows, ExportFormat::Csv, &options()).expect("export succeeds");

    assert!(result.content.contains(",\"Smith \"\"Jr\"\"\","));
}

#[test]
fn extras_only_rows_are_excluded() {
    let result = run(&sample_rows(), ExportFormat::Csv, &options()).expect("export succeeds");

    assert_eq!(result.contacts, 1);
    assert!(!result.content.contains("South"));
}

#[test_log::test]
fn header_only_and_blank_sheets_are_notices() {
    assert_eq!(
        run(&[header_row()], ExportFormat::Csv, &options()),
        Err(ServiceError::NoInputRows)
    );
    assert_eq!(
        run(&[header_row(), extras_only_row()], ExportFormat::Csv, &options()),
        Err(ServiceError::EmptyResult)
    );
}
