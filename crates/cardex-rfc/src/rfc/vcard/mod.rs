//! vCard 3.0 implementation (RFC 2426).
//!
//! This module provides the types and serializer used to emit contact
//! cards. Only writing is supported; cards are never parsed back.
//!
//! ## Usage
//!
//! ```rust
//! use cardex_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "Jane Doe"));
//! card.add_property(VCardProperty::text("EMAIL", "jane@example.com"));
//!
//! let output = serialize(&[card]);
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Output
//!
//! Properties are written in insertion order with CRLF line endings and
//! without line folding, so callers fully control the byte layout.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;

// Re-export commonly used types
pub use build::{escape_text, serialize};
pub use core::{StructuredName, VCard, VCardParameter, VCardProperty, VCardValue};
