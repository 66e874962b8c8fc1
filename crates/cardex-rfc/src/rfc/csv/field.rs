//! CSV field values.

use std::borrow::Cow;

use super::build::escape_csv;

/// One field of a CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvField {
    /// User data: always wrapped in double quotes.
    Quoted(String),
    /// Format constant written verbatim. Must not contain separators.
    Literal(&'static str),
}

impl CsvField {
    #[must_use]
    pub fn quoted(value: impl Into<String>) -> Self {
        Self::Quoted(value.into())
    }

    #[must_use]
    pub const fn literal(value: &'static str) -> Self {
        Self::Literal(value)
    }

    /// Returns the field as it appears in the output line.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Quoted(value) => Cow::Owned(escape_csv(value)),
            Self::Literal(value) => Cow::Borrowed(value),
        }
    }
}
