// Domain Layer - Pure decoding logic and entities

pub mod error;
pub mod field;
pub mod semiprime;

// Re-exports
pub use error::DecodeError;
pub use field::{decode_field, encode_field, encode_minimal, DecodedField, FieldCursor};
pub use semiprime::{SemiprimeRecord, SemiprimeView};
