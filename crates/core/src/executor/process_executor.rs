//! Subprocess executor backed by `tokio::process`.

use crate::executor::base::{CommandExecutor, CommandStatus, ExecutorError};
use crate::stage::ExternalCommand;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Runs commands as child processes of the current process.
///
/// Children inherit stdin, stdout and stderr, so their output appears
/// interleaved with the runner's own status lines. Each call waits for the
/// child to exit before returning.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    working_dir: PathBuf,
}

impl ProcessExecutor {
    /// Create an executor that runs commands in the current directory.
    pub fn new() -> Self {
        Self {
            working_dir: PathBuf::from("."),
        }
    }

    /// Set the directory commands are run in.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    /// Anchor path-like programs (`./build.sh`, `scripts/x`) to
    /// `working_dir`, which must already be absolute. Bare names are left for
    /// `PATH` lookup.
    fn resolve_program(working_dir: &Path, program: &Path) -> PathBuf {
        if program.is_relative() && program.components().count() > 1 {
            working_dir.join(program)
        } else {
            program.to_path_buf()
        }
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, command: &ExternalCommand) -> Result<CommandStatus, ExecutorError> {
        let working_dir =
            std::path::absolute(&self.working_dir).map_err(|source| ExecutorError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let mut cmd = Command::new(Self::resolve_program(&working_dir, &command.program));
        cmd.args(&command.args);
        cmd.current_dir(&working_dir);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let mut child = cmd.spawn().map_err(|source| ExecutorError::Spawn {
            program: command.program.clone(),
            source,
        })?;

        let status = child.wait().await.map_err(|source| ExecutorError::Wait {
            program: command.program.clone(),
            source,
        })?;

        Ok(status.into())
    }
}
