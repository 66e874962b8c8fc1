//! vCard value types.

use super::structured::StructuredName;

/// A vCard property value.
///
/// Covers the value shapes this crate writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Single text value.
    Text(String),

    /// Multi-valued text (comma-separated on output).
    TextList(Vec<String>),

    /// Structured name (N property).
    StructuredName(StructuredName),
}

impl VCardValue {
    /// Returns whether the value carries no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::TextList(list) => list.iter().all(String::is_empty),
            Self::StructuredName(name) => name.is_empty(),
        }
    }
}
