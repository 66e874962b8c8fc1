use cardex_test::app::cli::{
    CSV_IMPORT_NOTICE, ExportArgs, FormatChoice, run_export, run_export_at,
};
use cardex_test::app::error::AppError;
use cardex_test::component::config::Settings;
use cardex_test::component::error::ServiceError;
use cardex_test::fixtures::SAMPLE_CSV;

use crate::helpers::{fixed_timestamp, write_input};

fn export_args(input: std::path::PathBuf, output_dir: &std::path::Path) -> ExportArgs {
    ExportArgs {
        input,
        format: FormatChoice::Both,
        output_dir: Some(output_dir.to_path_buf()),
        time_zone: None,
        force: false,
    }
}

fn written_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("readable dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

#[test_log::test]
fn export_both_formats() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "sheet.csv", SAMPLE_CSV);
    let out = dir.path().join("out");

    let notices = run_export(&export_args(input, &out), &Settings::default())
        .expect("export succeeds");

    let files = written_files(&out);
    assert_eq!(files.len(), 2);
    assert!(files[0].starts_with("Contacts-Service-Missionary-"));
    assert!(files[0].ends_with(".csv"));
    assert!(files[1].ends_with(".vcf"));

    assert_eq!(notices.len(), 3);
    assert!(notices[0].starts_with("Saved 2 contact(s)"));
    assert_eq!(notices[1], CSV_IMPORT_NOTICE);
}

#[test]
fn vcf_only_has_no_import_reminder() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "sheet.csv", SAMPLE_CSV);
    let out = dir.path().join("out");
    let args = ExportArgs {
        format: FormatChoice::Vcf,
        ..export_args(input, &out)
    };

    let notices = run_export(&args, &Settings::default()).expect("export succeeds");

    assert_eq!(notices.len(), 1);
    assert_eq!(written_files(&out).len(), 1);
}

#[test_log::test]
fn empty_sheet_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "sheet.csv", "Title,First\n,,\n");
    let out = dir.path().join("out");

    let result = run_export(&export_args(input, &out), &Settings::default());

    assert!(matches!(
        result,
        Err(AppError::ServiceError(ServiceError::EmptyResult))
    ));
    assert!(!out.exists());
}

#[test]
fn header_only_sheet_is_a_notice() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "sheet.csv", "Title,First\n");
    let out = dir.path().join("out");

    let result = run_export(&export_args(input, &out), &Settings::default());

    assert!(matches!(
        result,
        Err(AppError::ServiceError(ServiceError::NoInputRows))
    ));
}

#[test]
fn unknown_time_zone_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "sheet.csv", SAMPLE_CSV);
    let args = ExportArgs {
        time_zone: Some("Mars/Olympus".into()),
        ..export_args(input, dir.path())
    };

    assert!(matches!(
        run_export(&args, &Settings::default()),
        Err(AppError::CoreError(_))
    ));
}

#[test_log::test]
fn existing_vcf_leaves_no_csv_behind() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "sheet.csv", SAMPLE_CSV);
    let out = dir.path().join("out");
    std::fs::create_dir(&out).expect("output dir");
    let taken = write_input(&out, "Contacts-Service-Missionary-20240305-143009.vcf", "keep");

    let result = run_export_at(
        &export_args(input, &out),
        &Settings::default(),
        fixed_timestamp(),
    );

    assert!(matches!(result, Err(AppError::OutputExists(path)) if path == taken));
    assert_eq!(
        written_files(&out),
        vec!["Contacts-Service-Missionary-20240305-143009.vcf"]
    );
    assert_eq!(std::fs::read_to_string(&taken).expect("readable"), "keep");
}

#[test]
fn force_replaces_both_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "sheet.csv", SAMPLE_CSV);
    let out = dir.path().join("out");
    std::fs::create_dir(&out).expect("output dir");
    let taken = write_input(&out, "Contacts-Service-Missionary-20240305-143009.vcf", "old");
    let args = ExportArgs {
        force: true,
        ..export_args(input, &out)
    };

    let notices = run_export_at(&args, &Settings::default(), fixed_timestamp())
        .expect("export succeeds");

    assert_eq!(notices.len(), 3);
    assert_eq!(
        written_files(&out),
        vec![
            "Contacts-Service-Missionary-20240305-143009.csv",
            "Contacts-Service-Missionary-20240305-143009.vcf",
        ]
    );
    assert!(
        std::fs::read_to_string(&taken)
            .expect("readable")
            .starts_with("BEGIN:VCARD\r\n")
    );
}
