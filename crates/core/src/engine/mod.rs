//! Stage execution engine.
//!
//! The [`StageRunner`] walks the requested stage list in order, resolving
//! each name as it reaches it and running the matching command through a
//! [`CommandExecutor`]. An unknown name stops the run; a failing command
//! does not.

pub mod error;

pub use error::{RunnerError, RunnerResult};

use crate::events::{StageEvent, StageReporter};
use crate::executor::{CommandExecutor, CommandStatus, ExecutorError};
use crate::stage::StageName;

/// What happened when a single stage ran.
#[derive(Debug)]
pub struct StageOutcome {
    pub stage: StageName,
    pub result: Result<CommandStatus, ExecutorError>,
}

impl StageOutcome {
    /// Whether the command ran and exited with code 0.
    pub fn succeeded(&self) -> bool {
        matches!(&self.result, Ok(status) if status.success())
    }
}

/// Every stage that ran, in order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<StageOutcome>,
}

impl RunSummary {
    pub fn stages(&self) -> Vec<StageName> {
        self.outcomes.iter().map(|outcome| outcome.stage).collect()
    }

    /// Outcomes whose command failed to run or exited non-zero.
    pub fn failures(&self) -> impl Iterator<Item = &StageOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.succeeded())
    }
}

/// Runs stages one at a time, in the order given.
pub struct StageRunner<E, R> {
    executor: E,
    reporter: R,
}

impl<E, R> StageRunner<E, R>
where
    E: CommandExecutor,
    R: StageReporter,
{
    pub fn new(executor: E, reporter: R) -> Self {
        Self { executor, reporter }
    }

    /// Run `stages` in order.
    ///
    /// Each name is resolved only when the runner reaches it, so stages ahead
    /// of an unknown name still run. Duplicates run again.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::UnknownStage`] for the first name that is not a
    /// known stage. Nothing after it is run.
    pub async fn run<S: AsRef<str>>(&mut self, stages: &[S]) -> RunnerResult<RunSummary> {
        let planned = stages.iter().map(|s| s.as_ref().to_string()).collect();
        self.reporter.report(&StageEvent::Planned(planned));

        let mut summary = RunSummary::default();

        for name in stages {
            let name = name.as_ref();
            let stage = match name.parse::<StageName>() {
                Ok(stage) => stage,
                Err(_) => {
                    self.reporter
                        .report(&StageEvent::UnknownStage(name.to_string()));
                    return Err(RunnerError::UnknownStage(name.to_string()));
                }
            };

            summary.outcomes.push(self.run_stage(stage).await);
        }

        Ok(summary)
    }

    async fn run_stage(&mut self, stage: StageName) -> StageOutcome {
        self.reporter.report(&StageEvent::Started(stage));

        let result = self.executor.execute(&stage.command()).await;

        // The run continues whatever the command did.
        let failure = match &result {
            Ok(status) if status.success() => None,
            Ok(CommandStatus { code: Some(code) }) => Some(format!("exited with code {code}")),
            Ok(CommandStatus { code: None }) => Some("terminated by signal".to_string()),
            Err(e) => Some(e.to_string()),
        };
        if let Some(reason) = failure {
            self.reporter
                .report(&StageEvent::CommandFailed { stage, reason });
        }

        self.reporter.report(&StageEvent::Finished(stage));

        StageOutcome { stage, result }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_parts(self) -> (E, R) {
        (self.executor, self.reporter)
    }
}
