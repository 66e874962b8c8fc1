//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use cardex_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//!
//! let output = serialize(&[card]);
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
//! ```
//!
//! ## Features
//!
//! - Text escaping per RFC 2426 (backslash, semicolon, comma, newline)
//! - Quoted parameter values when they contain separators
//! - Structured value serialization (N)

mod escape;
mod serializer;

pub use escape::{escape_component, escape_param_value, escape_text};
pub use serializer::serialize;
