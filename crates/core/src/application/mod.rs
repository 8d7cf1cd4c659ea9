// Application Layer - Use Cases

pub mod reader;

// Re-exports
pub use reader::{decode_records, ReaderOptions, SemiprimeReader};
