// Semiprime Generator Port
// Abstraction over the external program that emits length-prefixed records

use async_trait::async_trait;
use thiserror::Error;

/// Default payload width passed as the generator's `min_bytes` positional
pub const DEFAULT_MIN_BYTES: usize = 10;

/// Default number of records requested with `-c`
pub const DEFAULT_COUNT: usize = 1;

/// Parameters for one generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub min_bytes: usize,
    pub max_bytes: Option<usize>,
    pub count: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            min_bytes: DEFAULT_MIN_BYTES,
            max_bytes: None,
            count: DEFAULT_COUNT,
        }
    }
}

impl GenerationRequest {
    /// Generator argument list: `min_bytes [max_bytes] -v -c count`
    ///
    /// `-v` makes the generator append both factors after each semiprime.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.min_bytes.to_string()];
        if let Some(max_bytes) = self.max_bytes {
            args.push(max_bytes.to_string());
        }
        args.extend([
            "-v".to_string(),
            "-c".to_string(),
            self.count.to_string(),
        ]);
        args
    }
}

/// Captured generator output
#[derive(Debug, Clone)]
pub struct GeneratorOutput {
    pub stdout: Vec<u8>,
    pub duration_ms: i64,
}

/// Generator errors
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Generator exited with status {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Semiprime generator trait
///
/// Implementations:
/// - SubprocessGenerator: spawns the external generator binary
/// - MockGenerator: canned output for tests
#[async_trait]
pub trait SemiprimeGenerator: Send + Sync {
    /// Run the generator once and capture its standard output
    ///
    /// # Errors
    /// - GeneratorError::SpawnFailed if the process cannot be started
    /// - GeneratorError::NonZeroExit if the process reports failure
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GeneratorOutput, GeneratorError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};
    /// Mock generator behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Return these bytes as stdout
        Output(Vec<u8>),
        /// Fail to spawn with message
        SpawnFail(String),
        /// Exit with this code
        Exit(i32),
    }
    /// Mock generator for testing
    pub struct MockGenerator {
        behavior: MockBehavior,
        requests: Arc<Mutex<Vec<GenerationRequest>>>,
    }
    impl MockGenerator {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn with_output(bytes: impl Into<Vec<u8>>) -> Self {
            Self::new(MockBehavior::Output(bytes.into()))
        }
        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
        pub fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }
    #[async_trait]
    impl SemiprimeGenerator for MockGenerator {
        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GeneratorOutput, GeneratorError> {
            self.requests.lock().unwrap().push(request.clone());

            match &self.behavior {
                MockBehavior::Output(bytes) => Ok(GeneratorOutput {
                    stdout: bytes.clone(),
                    duration_ms: 1,
                }),
                MockBehavior::SpawnFail(msg) => Err(GeneratorError::SpawnFailed(msg.clone())),
                MockBehavior::Exit(code) => Err(GeneratorError::NonZeroExit {
                    code: Some(*code),
                    stderr: String::new(),
                }),
            }
        }
    }
}
