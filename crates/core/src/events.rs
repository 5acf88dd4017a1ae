//! Status events emitted while stages run.
//!
//! Reporting is synchronous: the runner calls the reporter before and after
//! each command, so anything the reporter prints lands in order with the
//! child process output.

use crate::stage::StageName;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// The full list of requested stages, before anything runs.
    Planned(Vec<String>),
    /// A stage's command is about to start.
    Started(StageName),
    /// A stage's command could not be run or exited unsuccessfully.
    ///
    /// Informational only; the run continues.
    CommandFailed { stage: StageName, reason: String },
    /// A stage's command has returned.
    Finished(StageName),
    /// A requested stage is not one of the known stages. The run stops here.
    UnknownStage(String),
}

impl fmt::Display for StageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planned(stages) => write!(f, "Stages: {stages:?}"),
            Self::Started(stage) => f.write_str(stage.start_message()),
            Self::CommandFailed { stage, reason } => write!(f, "[{stage}] {reason}"),
            Self::Finished(stage) => f.write_str(stage.done_message()),
            Self::UnknownStage(name) => write!(f, "Unknown stage: {name}"),
        }
    }
}

/// Receives status events from a [`StageRunner`](crate::engine::StageRunner).
pub trait StageReporter {
    fn report(&mut self, event: &StageEvent);
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<StageEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines, one per event.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl StageReporter for RecordingReporter {
    fn report(&mut self, event: &StageEvent) {
        self.events.push(event.clone());
    }
}

impl<R: StageReporter + ?Sized> StageReporter for &mut R {
    fn report(&mut self, event: &StageEvent) {
        (**self).report(event);
    }
}
