//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Backslash, semicolon, comma and newline are escaped; carriage returns
/// are dropped. Runs in a single pass so inserted backslashes are never
/// escaped a second time.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }

    result
}

/// Escapes one component of a structured or list value.
///
/// vCard 3.0 uses the same rules as for plain text.
#[must_use]
pub fn escape_component(s: &str) -> String {
    escape_text(s)
}

/// Escapes a parameter value for vCard serialization.
///
/// Double quotes and control characters are not allowed in 3.0 parameter
/// values and are dropped. Returns `(value, needs_quotes)`.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '"' => {}
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {}
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}
