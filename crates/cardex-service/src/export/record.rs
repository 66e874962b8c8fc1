//! Normalized contact records.

use cardex_core::constants::FALLBACK_FULL_NAME;
use cardex_core::date::{self, DateZone};
use cardex_core::types::{Column, RawRow};

/// One contact, normalized from a spreadsheet row.
///
/// Every text field is trimmed. `release` holds a `YYYY-MM-DD` date, the
/// trimmed original text when it could not be parsed, or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub zone: String,
    pub stake: String,
    pub release: String,
    pub phone: String,
    pub email: String,
}

impl ContactRecord {
    /// Normalizes a raw row.
    #[must_use]
    pub fn from_row(row: &RawRow, zone: DateZone) -> Self {
        let text = |column: Column| row.cell(column).as_text(zone).trim().to_string();

        Self {
            title: text(Column::Title),
            first_name: text(Column::FirstName),
            last_name: text(Column::LastName),
            zone: text(Column::Zone),
            stake: text(Column::Stake),
            release: date::normalize(row.cell(Column::Release), zone),
            phone: text(Column::Phone),
            email: text(Column::Email),
        }
    }

    /// A record is significant when it has a name, phone or email.
    ///
    /// Zone, stake and release alone do not make a contact.
    #[must_use]
    pub fn is_significant(&self) -> bool {
        [&self.first_name, &self.last_name, &self.phone, &self.email]
            .iter()
            .any(|field| !field.trim().is_empty())
    }

    /// Display name: title, first and last name joined by single spaces,
    /// skipping empty parts. Falls back to `"Contact"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        let full = [&self.title, &self.first_name, &self.last_name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        if full.is_empty() {
            FALLBACK_FULL_NAME.to_string()
        } else {
            full
        }
    }
}

/// Outcome of normalizing the data rows of a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedRecords {
    /// Significant records in sheet order.
    pub records: Vec<ContactRecord>,
    /// Rows dropped because they had no name, phone or email.
    pub skipped: usize,
}

/// Normalizes data rows and drops insignificant ones.
///
/// `rows` must not include the header row.
#[must_use]
pub fn prepare<'a>(rows: impl IntoIterator<Item = &'a RawRow>, zone: DateZone) -> PreparedRecords {
    let mut prepared = PreparedRecords::default();

    for row in rows {
        let record = ContactRecord::from_row(row, zone);
        if record.is_significant() {
            prepared.records.push(record);
        } else {
            prepared.skipped += 1;
        }
    }

    prepared
}
