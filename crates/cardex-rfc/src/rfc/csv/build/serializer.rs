//! CSV serialization.

use crate::rfc::csv::CsvField;

/// Header names and rows are separated by commas; every line ends in LF.
const SEPARATOR: char = ',';
const LINE_END: char = '\n';

/// Serializes the header line alone.
///
/// This is also the output for zero rows, which callers use to detect an
/// export without data.
#[must_use]
pub fn serialize_header(header: &[&str]) -> String {
    let mut output = String::new();
    push_line(header.iter().copied(), &mut output);
    output
}

/// Serializes a header followed by one line per row.
#[must_use]
pub fn serialize(header: &[&str], rows: &[Vec<CsvField>]) -> String {
    let mut output = serialize_header(header);

    for row in rows {
        push_line(row.iter().map(CsvField::render), &mut output);
    }

    output
}

fn push_line<I, S>(fields: I, output: &mut String)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            output.push(SEPARATOR);
        }
        output.push_str(field.as_ref());
    }
    output.push(LINE_END);
}
