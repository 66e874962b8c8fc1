use cardex_test::app::error::AppError;
use cardex_test::app::input::{read_grid, read_rows};
use cardex_test::component::types::{CellValue, Column};

use crate::helpers::write_input;

#[test]
fn json_and_csv_sheets_agree() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = write_input(
        dir.path(),
        "sheet.csv",
        "Title,First,Last\nElder,John,Smith\n",
    );
    let json = write_input(
        dir.path(),
        "sheet.json",
        r#"[["Title", "First", "Last"], ["Elder", "John", "Smith"]]"#,
    );

    assert_eq!(
        read_rows(&csv).expect("csv readable"),
        read_rows(&json).expect("json readable")
    );
}

#[test]
fn json_numbers_and_dates_keep_their_type() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(
        dir.path(),
        "sheet.json",
        r#"[[], [null, "Ann", null, null, null, {"date": "2024-03-05"}, 5551234, null]]"#,
    );

    let rows = read_rows(&path).expect("readable");

    assert_eq!(rows[1].cell(Column::Phone), &CellValue::Number(5_551_234.0));
    assert!(matches!(rows[1].cell(Column::Release), CellValue::Date(_)));
    assert_eq!(rows[1].cell(Column::Title), &CellValue::Empty);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "sheet.xlsx", "not a sheet");

    assert!(matches!(read_grid(&path), Err(AppError::UnsupportedInput(_))));
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "sheet.json", r#"[["a", [1]]]"#);

    assert!(matches!(read_grid(&path), Err(AppError::Json(_))));
}
