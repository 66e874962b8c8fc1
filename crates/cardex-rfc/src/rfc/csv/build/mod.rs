//! CSV serialization.

mod escape;
mod serializer;

pub use escape::escape_csv;
pub use serializer::{serialize, serialize_header};
