//! Mock executor implementations for deterministic testing.

use async_trait::async_trait;
use sr_core::executor::{CommandExecutor, CommandStatus, ExecutorError};
use sr_core::stage::ExternalCommand;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Records every command it is asked to run and returns a fixed exit code
/// per program (0 unless configured otherwise).
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    pub calls: Arc<Mutex<Vec<ExternalCommand>>>,
    pub exit_codes: HashMap<PathBuf, i32>,
}

impl RecordingExecutor {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(PathBuf::from(program), code);
        self
    }

    /// Programs invoked so far, as strings.
    #[allow(dead_code)]
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|command| command.program.display().to_string())
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, command: &ExternalCommand) -> Result<CommandStatus, ExecutorError> {
        self.calls.lock().unwrap().push(command.clone());
        let code = self.exit_codes.get(&command.program).copied().unwrap_or(0);
        Ok(CommandStatus::from_code(code))
    }
}

/// Fails to spawn every command, as if none of the scripts existed.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MissingScriptExecutor {
    pub attempts: Arc<Mutex<usize>>,
}

#[async_trait]
impl CommandExecutor for MissingScriptExecutor {
    async fn execute(&self, command: &ExternalCommand) -> Result<CommandStatus, ExecutorError> {
        *self.attempts.lock().unwrap() += 1;
        Err(ExecutorError::Spawn {
            program: command.program.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        })
    }
}
