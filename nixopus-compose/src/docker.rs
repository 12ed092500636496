//! Docker Compose execution
//!
//! Runs compose commands as blocking child processes and folds their exit
//! status and output into a `PhaseResult`. A non-zero exit and a failure to
//! launch the program are both reported as `success == false`.

use nixopus_core::{ComposeFilePath, ComposeSubcommand, PhaseResult, ServiceRunner};
use std::process::{Command, Output};
use tracing::{debug, warn};

use crate::command::{ComposeCommand, DEFAULT_PROGRAM};

/// Runs compose commands through the container tool binary
#[derive(Debug, Clone)]
pub struct DockerComposeRunner {
    program: String,
}

impl DockerComposeRunner {
    /// Creates a runner using `docker`
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Creates a runner using a different binary (e.g. `podman`)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs a compose command and waits for it to exit
    ///
    /// # Returns
    /// Trimmed stdout on success. On failure, trimmed stderr, falling back
    /// to stdout, falling back to the exit status.
    pub fn run(&self, command: &ComposeCommand) -> PhaseResult {
        let command_line = command.display_with(&self.program);
        debug!("Running {}", command_line);

        let output = match Command::new(&self.program).args(command.args()).output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to execute '{}': {}", command_line, e);
                return PhaseResult::failed(format!(
                    "Failed to execute '{}': {}",
                    self.program, e
                ));
            }
        };

        Self::into_phase_result(&command_line, output)
    }

    /// Runs a compose command with the terminal attached
    ///
    /// Output streams straight to the user instead of being captured, for
    /// foreground runs. The result carries only the exit status on failure.
    pub fn run_attached(&self, command: &ComposeCommand) -> PhaseResult {
        let command_line = command.display_with(&self.program);
        debug!("Running attached {}", command_line);

        match Command::new(&self.program).args(command.args()).status() {
            Ok(status) if status.success() => PhaseResult::succeeded(""),
            Ok(status) => {
                let exit_code = status.code().unwrap_or(-1);
                debug!("{} failed: exit_code={}", command_line, exit_code);
                PhaseResult::failed(format!("exit status {}", exit_code))
            }
            Err(e) => {
                warn!("Failed to execute '{}': {}", command_line, e);
                PhaseResult::failed(format!("Failed to execute '{}': {}", self.program, e))
            }
        }
    }

    fn into_phase_result(command_line: &str, output: Output) -> PhaseResult {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = stdout.trim();
        let stderr = stderr.trim();

        if !stdout.is_empty() {
            debug!("{} stdout: {}", command_line, stdout);
        }
        if !stderr.is_empty() {
            debug!("{} stderr: {}", command_line, stderr);
        }

        if output.status.success() {
            debug!("{} completed successfully", command_line);
            return PhaseResult::succeeded(stdout);
        }

        let exit_code = output.status.code().unwrap_or(-1);
        debug!("{} failed: exit_code={}", command_line, exit_code);

        let diagnostic = if !stderr.is_empty() {
            stderr.to_string()
        } else if !stdout.is_empty() {
            stdout.to_string()
        } else {
            format!("exit status {}", exit_code)
        };

        PhaseResult::failed(diagnostic)
    }
}

impl Default for DockerComposeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRunner for DockerComposeRunner {
    fn execute(
        &self,
        compose_file: &ComposeFilePath,
        subcommand: ComposeSubcommand,
        detach: bool,
    ) -> PhaseResult {
        let command = ComposeCommand::new(compose_file.clone(), subcommand).detach(detach);
        self.run(&command)
    }
}
