//! CSV quoting.

/// Wraps a value in double quotes, doubling every embedded quote.
///
/// Commas and line breaks need no further treatment inside quotes.
#[must_use]
pub fn escape_csv(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);

    result.push('"');
    for c in s.chars() {
        if c == '"' {
            result.push('"');
        }
        result.push(c);
    }
    result.push('"');

    result
}
