//! # sr-core
//!
//! Core of stage-runner: resolves stage names and runs the matching external
//! commands one after another.
//!
//! ## Modules
//!
//! - [`stage`]: Stage names and their commands
//! - [`executor`]: Command execution trait and subprocess implementation
//! - [`engine`]: The sequential stage runner
//! - [`events`]: Status events and reporters

pub mod engine;
pub mod events;
pub mod executor;
pub mod stage;

pub use engine::{RunSummary, RunnerError, StageOutcome, StageRunner};
pub use events::{RecordingReporter, StageEvent, StageReporter};
pub use executor::{CommandExecutor, CommandStatus, ExecutorError, ProcessExecutor};
pub use stage::{ExternalCommand, StageName};
