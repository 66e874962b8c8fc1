//! Google contacts CSV mapping.
//!
//! Title maps to "Name Prefix", zone and stake become labeled custom fields,
//! and the release date becomes a labeled event.

use cardex_rfc::rfc::csv::{self as csv_format, CsvField};

use super::record::ContactRecord;

/// Column names of the Google contacts import schema, in output order.
pub const HEADER: [&str; 12] = [
    "Given Name",
    "Family Name",
    "Name Prefix",
    "Phone 1 - Value",
    "E-mail 1 - Value",
    "E-mail 1 - Type",
    "Custom Field 1 - Label",
    "Custom Field 1 - Value",
    "Custom Field 2 - Label",
    "Custom Field 2 - Value",
    "Event 1 - Label",
    "Event 1 - Value",
];

const EMAIL_TYPE: &str = "Home";
const ZONE_LABEL: &str = "Zone";
const STAKE_LABEL: &str = "Stake";
const RELEASE_LABEL: &str = "Release";

/// Maps one record onto the header columns.
#[must_use]
pub fn record_fields(record: &ContactRecord) -> Vec<CsvField> {
    vec![
        CsvField::quoted(&record.first_name),
        CsvField::quoted(&record.last_name),
        CsvField::quoted(&record.title),
        CsvField::quoted(&record.phone),
        CsvField::quoted(&record.email),
        CsvField::literal(EMAIL_TYPE),
        CsvField::literal(ZONE_LABEL),
        CsvField::quoted(&record.zone),
        CsvField::literal(STAKE_LABEL),
        CsvField::quoted(&record.stake),
        CsvField::literal(RELEASE_LABEL),
        CsvField::quoted(&record.release),
    ]
}

/// Serializes records to CSV. The header line is always present.
#[must_use]
pub fn serialize(records: &[ContactRecord]) -> String {
    let rows: Vec<Vec<CsvField>> = records.iter().map(record_fields).collect();
    csv_format::serialize(&HEADER, &rows)
}

/// Output produced when there are no records.
#[must_use]
pub fn empty_baseline() -> String {
    csv_format::build::serialize_header(&HEADER)
}
