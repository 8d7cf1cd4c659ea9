// sprime Infrastructure - System Adapters
// Implements: SemiprimeGenerator

pub mod subprocess_generator;

pub use subprocess_generator::SubprocessGenerator;
