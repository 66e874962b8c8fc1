//! vCard property types.

use super::parameter::VCardParameter;
use super::structured::StructuredName;
use super::value::VCardValue;

/// A vCard property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Value.
    pub value: VCardValue,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: VCardValue::Text(value.into()),
        }
    }

    /// Creates a property with a comma-separated text list value.
    #[must_use]
    pub fn text_list<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: VCardValue::TextList(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates an N property.
    #[must_use]
    pub fn structured_name(name: StructuredName) -> Self {
        Self {
            name: names::N.to_string(),
            params: Vec::new(),
            value: VCardValue::StructuredName(name),
        }
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        if let Some(param) = self.params.iter_mut().find(|p| p.name == "TYPE") {
            param.values.push(type_value.into());
        } else {
            self.params.push(VCardParameter::type_param(type_value));
        }
    }

    /// Builder form of [`VCardProperty::add_type`].
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for type_value in types {
            self.add_type(type_value);
        }
        self
    }
}

/// Property names written by cardex.
pub mod names {
    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";

    // Explanatory
    pub const CATEGORIES: &str = "CATEGORIES";

    // Extensions
    pub const X_ZONE: &str = "X-ZONE";
    pub const X_STAKE: &str = "X-STAKE";
    pub const X_RELEASE: &str = "X-RELEASE";
}
