//! vCard wrapper type.

use super::property::VCardProperty;

/// The only vCard version this crate writes.
pub const VCARD_VERSION: &str = "3.0";

/// A single vCard: an ordered list of properties between BEGIN and END.
///
/// `BEGIN`, `VERSION` and `END` are implied and written by the serializer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VCard {
    /// Properties in output order.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates an empty vCard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// Appends a property unless its value is empty.
    pub fn add_if_present(&mut self, prop: VCardProperty) {
        if !prop.value.is_empty() {
            self.properties.push(prop);
        }
    }

}
