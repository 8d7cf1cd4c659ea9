// Subprocess generator implementation
// reason: async-trait, tokio for async process management
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::{info, warn};

use sprime_core::port::generator::{
    GenerationRequest, GeneratorError, GeneratorOutput, SemiprimeGenerator,
};
use sprime_core::port::TimeProvider;

/// Subprocess generator
/// Spawns the external semiprime generator and captures its raw stdout
pub struct SubprocessGenerator {
    time_provider: Arc<dyn TimeProvider>,
    program: PathBuf,
    prefix_args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl SubprocessGenerator {
    /// Create a new subprocess generator
    ///
    /// # Arguments
    /// * `time_provider` - Time provider for duration tracking
    /// * `program` - Generator executable (resolved through PATH when not a path)
    ///
    /// # Example
    /// ```ignore
    /// let generator = SubprocessGenerator::new(
    ///     Arc::new(SystemTimeProvider),
    ///     "./build/gen",
    /// );
    /// ```
    pub fn new(time_provider: Arc<dyn TimeProvider>, program: impl Into<PathBuf>) -> Self {
        Self {
            time_provider,
            program: program.into(),
            prefix_args: Vec::new(),
            working_dir: None,
        }
    }

    /// Arguments placed before the generated argument list
    /// (e.g. a wrapper such as `sh -c <script>`)
    pub fn with_prefix_args(mut self, args: Vec<String>) -> Self {
        self.prefix_args = args;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Full argument list for one invocation
    fn build_args(&self, request: &GenerationRequest) -> Vec<String> {
        let mut args = self.prefix_args.clone();
        args.extend(request.to_args());
        args
    }

    /// Spawn child process and wait for output
    async fn spawn_and_wait(&self, args: &[String]) -> Result<std::process::Output, GeneratorError> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let child = command.spawn().map_err(|e| {
            GeneratorError::SpawnFailed(format!("{}: {}", self.program.display(), e))
        })?;

        child
            .wait_with_output()
            .await
            .map_err(|e| GeneratorError::IoError(e.to_string()))
    }

    /// Turn process output into captured bytes, rejecting unsuccessful exits
    fn check_output(
        &self,
        output: std::process::Output,
        duration_ms: i64,
    ) -> Result<GeneratorOutput, GeneratorError> {
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                program = %self.program.display(),
                exit_code = ?output.status.code(),
                stderr = %stderr,
                "Generator failed"
            );
            return Err(GeneratorError::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(GeneratorOutput {
            stdout: output.stdout,
            duration_ms,
        })
    }
}

#[async_trait]
impl SemiprimeGenerator for SubprocessGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratorOutput, GeneratorError> {
        let args = self.build_args(request);
        let start_time = self.time_provider.now_millis();

        info!(
            program = %self.program.display(),
            args = ?args,
            "Starting generator"
        );

        let output = self.spawn_and_wait(&args).await?;

        let duration_ms = self.time_provider.now_millis() - start_time;

        info!(
            program = %self.program.display(),
            duration_ms = %duration_ms,
            exit_code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            "Generator completed"
        );

        self.check_output(output, duration_ms)
    }
}
