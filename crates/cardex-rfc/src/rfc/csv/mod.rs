//! CSV output in the fixed-header layout used for contact imports.
//!
//! ## Overview
//!
//! Each row mixes quoted user values with bare label constants, which a
//! general-purpose CSV writer cannot express with a single quoting policy.
//! Fields therefore carry their own quoting mode.
//!
//! ```rust
//! use cardex_rfc::rfc::csv::{CsvField, serialize};
//!
//! let rows = vec![vec![CsvField::quoted("John"), CsvField::literal("Home")]];
//! let output = serialize(&["Given Name", "E-mail 1 - Type"], &rows);
//! assert_eq!(output, "Given Name,E-mail 1 - Type\n\"John\",Home\n");
//! ```

pub mod build;
mod field;

pub use build::{escape_csv, serialize};
pub use field::CsvField;
