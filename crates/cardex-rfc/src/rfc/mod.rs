pub mod csv;
pub mod vcard;
