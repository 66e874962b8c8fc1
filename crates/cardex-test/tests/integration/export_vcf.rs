use cardex_test::app::input::parse_json;
use cardex_test::component::date::DateZone;
use cardex_test::component::export::{ExportOptions, run};
use cardex_test::component::types::{ExportFormat, RawRow};
use cardex_test::fixtures::{header_row, sample_rows, smith_row};
use cardex_test::rfc::rfc::vcard::core::names;

use crate::helpers::options;

#[test_log::test]
fn structured_row_produces_full_card() {
    let result = run(&[header_row(), smith_row()], ExportFormat::Vcf, &options())
        .expect("export succeeds");

    assert_eq!(
        result.content,
        "BEGIN:VCARD\r\n\
         VERSION:3.0\r\n\
         N:Smith;John;;;\r\n\
         FN:Elder John Smith\r\n\
         TEL;TYPE=CELL,VOICE:1234567890\r\n\
         EMAIL;TYPE=INTERNET:j@example.com\r\n\
         X-ZONE:North\r\n\
         X-STAKE:Lake\r\n\
         X-RELEASE;TYPE=RELEASE:2024-03-05\r\n\
         CATEGORIES:Service\r\n\
         END:VCARD\r\n"
    );
    assert_eq!(
        result.suggested_filename,
        "Contacts-Service-Missionary-20240305-143009.vcf"
    );
}

#[test]
fn one_block_per_significant_row() {
    let mut rows = sample_rows();
    rows.push(smith_row());

    let result = run(&rows, ExportFormat::Vcf, &options()).expect("export succeeds");

    assert_eq!(result.contacts, 2);
    assert_eq!(result.content.matches("BEGIN:VCARD\r\n").count(), 2);
    assert_eq!(result.content.matches("END:VCARD\r\n").count(), 2);
    assert!(!result.content.contains("X-ZONE:South"));
}

#[test]
fn every_line_ends_with_crlf() {
    let result = run(&sample_rows(), ExportFormat::Vcf, &options()).expect("export succeeds");

    let stripped = result.content.replace("\r\n", "");
    assert!(!stripped.contains('\n'));
    assert!(!stripped.contains('\r'));
}

#[test]
fn property_names_match_card_lines() {
    let result = run(&sample_rows(), ExportFormat::Vcf, &options()).expect("export succeeds");

    for name in [names::N, names::FN, names::TEL, names::EMAIL, names::CATEGORIES] {
        assert!(
            result.content.lines().any(|line| line.starts_with(name)),
            "missing {name}"
        );
    }
}

#[test_log::test]
fn date_time_cells_use_the_configured_zone() {
    let rows: Vec<RawRow> = parse_json(
        r#"[
            ["Title", "First", "Last", "Zone", "Stake", "Release", "Phone", "Email"],
            ["", "Ann", "", "", "", {"datetime": "2024-03-05T02:00:00Z"}, "", ""]
        ]"#,
    )
    .expect("valid json")
    .into_iter()
    .map(RawRow::new)
    .collect();

    let denver = ExportOptions {
        zone: DateZone::from_name(Some("America/Denver")).expect("known zone"),
        ..options()
    };
    let tokyo = ExportOptions {
        zone: DateZone::from_name(Some("Asia/Tokyo")).expect("known zone"),
        ..options()
    };

    let in_denver = run(&rows, ExportFormat::Vcf, &denver).expect("export succeeds");
    let in_tokyo = run(&rows, ExportFormat::Vcf, &tokyo).expect("export succeeds");

    assert!(in_denver.content.contains("X-RELEASE;TYPE=RELEASE:2024-03-04\r\n"));
    assert!(in_tokyo.content.contains("X-RELEASE;TYPE=RELEASE:2024-03-05\r\n"));
}
