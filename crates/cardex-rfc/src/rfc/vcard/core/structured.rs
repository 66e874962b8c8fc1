//! Structured vCard types.

/// Structured name (N property, RFC 2426 §3.1.2).
///
/// Serialized as `family;given;additional;prefixes;suffixes`. All
/// components are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Elder").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    ///
    /// Empty parts are dropped so they serialize as empty components.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        let non_empty = |s: String| if s.is_empty() { Vec::new() } else { vec![s] };
        Self {
            family: non_empty(family.into()),
            given: non_empty(given.into()),
            ..Self::default()
        }
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.given.is_empty()
            && self.additional.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }
}
