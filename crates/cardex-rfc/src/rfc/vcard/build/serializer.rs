//! vCard serialization.

use super::escape::{escape_component, escape_param_value, escape_text};
use crate::rfc::vcard::core::{
    StructuredName, VCARD_VERSION, VCard, VCardParameter, VCardProperty, VCardValue,
};

/// Line terminator mandated by the vCard format, independent of platform.
const CRLF: &str = "\r\n";

/// Serializes one or more vCards to a string.
///
/// ## Summary
/// Cards are concatenated with no separator beyond their own line endings.
/// An empty slice yields an empty string.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for card in cards {
        serialize_vcard(card, &mut output);
    }

    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD");
    output.push_str(CRLF);

    // VERSION must be first after BEGIN
    output.push_str("VERSION:");
    output.push_str(VCARD_VERSION);
    output.push_str(CRLF);

    for prop in &card.properties {
        serialize_property(prop, output);
    }

    output.push_str("END:VCARD");
    output.push_str(CRLF);
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    output.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, output);
    }

    output.push(':');
    serialize_value(&prop.value, output);
    output.push_str(CRLF);
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) => {
            output.push_str(&escape_text(s));
        }
        VCardValue::TextList(list) => {
            serialize_component_list(list, output);
        }
        VCardValue::StructuredName(name) => {
            serialize_structured_name(name, output);
        }
    }
}

fn serialize_structured_name(name: &StructuredName, output: &mut String) {
    // family;given;additional;prefixes;suffixes
    serialize_component_list(&name.family, output);
    output.push(';');
    serialize_component_list(&name.given, output);
    output.push(';');
    serialize_component_list(&name.additional, output);
    output.push(';');
    serialize_component_list(&name.prefixes, output);
    output.push(';');
    serialize_component_list(&name.suffixes, output);
}

fn serialize_component_list(list: &[String], output: &mut String) {
    for (i, s) in list.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&escape_component(s));
    }
}
