//! External command description.

use std::fmt;
use std::path::PathBuf;

/// An executable the runner invokes but does not own.
///
/// The program path is used as given; relative paths resolve against the
/// executor's working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    /// Path to the executable.
    pub program: PathBuf,

    /// Arguments passed to the executable. Stage commands take none.
    pub args: Vec<String>,
}

impl ExternalCommand {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }

    /// Append an argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
