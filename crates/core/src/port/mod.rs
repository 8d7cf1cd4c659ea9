// Port Layer - Interfaces for external dependencies

pub mod generator;
pub mod time_provider;

// Re-exports
pub use generator::{GenerationRequest, GeneratorError, GeneratorOutput, SemiprimeGenerator};
pub use time_provider::TimeProvider;
