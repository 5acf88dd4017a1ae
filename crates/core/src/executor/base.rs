//! Base executor trait and supporting types.

use crate::stage::ExternalCommand;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// How an external command terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Failed to spawn command '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to wait for command '{}': {source}", program.display())]
    Wait {
        program: PathBuf,
        source: std::io::Error,
    },
}

#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` to completion and report how it exited.
    async fn execute(&self, command: &ExternalCommand) -> Result<CommandStatus, ExecutorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_only_for_zero() {
        assert!(CommandStatus::from_code(0).success());
        assert!(!CommandStatus::from_code(1).success());
        assert!(!CommandStatus { code: None }.success());
    }

    #[test]
    fn test_spawn_error_names_program() {
        let err = ExecutorError::Spawn {
            program: PathBuf::from("./clean.sh"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to spawn command './clean.sh': not found"
        );
    }
}
