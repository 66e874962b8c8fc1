//! Core vCard types.

mod parameter;
mod property;
mod structured;
mod value;
mod vcard;

pub use parameter::VCardParameter;
pub use property::{VCardProperty, names};
pub use structured::StructuredName;
pub use value::VCardValue;
pub use vcard::{VCARD_VERSION, VCard};
