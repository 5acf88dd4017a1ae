//! Stage name enumeration and its fixed dispatch table.

use crate::stage::command::ExternalCommand;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four stages the runner knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageName {
    Clean,
    Init,
    Build,
    Test,
}

/// Returned when a token does not name a known stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown stage: {0}")]
pub struct ParseStageError(pub String);

impl StageName {
    /// Every stage, in the order they are usually run.
    pub const ALL: [StageName; 4] = [Self::Clean, Self::Init, Self::Build, Self::Test];

    /// Canonical lowercase name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Init => "init",
            Self::Build => "build",
            Self::Test => "test",
        }
    }

    /// The script this stage invokes, relative to the working directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sr_core::stage::StageName;
    ///
    /// let command = StageName::Build.command();
    /// assert_eq!(command.program.to_str(), Some("./build.sh"));
    /// assert!(command.args.is_empty());
    /// ```
    pub fn command(self) -> ExternalCommand {
        ExternalCommand::new(format!("./{}.sh", self.as_str()))
    }

    /// Line printed before the stage's command starts.
    pub fn start_message(self) -> &'static str {
        match self {
            Self::Clean => "Cleaning...",
            Self::Init => "Initializing...",
            Self::Build => "Building...",
            Self::Test => "Testing...",
        }
    }

    /// Line printed once the stage's command has exited.
    pub fn done_message(self) -> &'static str {
        match self {
            Self::Clean => "Cleaned.",
            Self::Init => "Initialized.",
            Self::Build => "Built.",
            Self::Test => "Tested.",
        }
    }
}

impl FromStr for StageName {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| ParseStageError(s.to_string()))
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
