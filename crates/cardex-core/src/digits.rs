//! Phone cell cleanup.
//!
//! ## Summary
//! Strips formatting from phone numbers so only the raw digits remain,
//! e.g. `"(123) 456-7890"` becomes `"1234567890"`.

use crate::types::CellValue;

/// Removes every character that is not an ASCII digit.
#[must_use]
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// ## Summary
/// Cleans one cell.
///
/// Only non-blank text cells are touched. Returns `None` when the cell is
/// left as it was, so callers can count real modifications.
#[must_use]
pub fn clean_cell(cell: &CellValue) -> Option<CellValue> {
    let CellValue::Text(text) = cell else {
        return None;
    };
    if text.trim().is_empty() {
        return None;
    }

    let cleaned = digits_only(text);
    (cleaned != *text).then_some(CellValue::Text(cleaned))
}
