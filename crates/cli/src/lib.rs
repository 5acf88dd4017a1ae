//! # sr-cli
//!
//! Command-line front end for stage-runner: argument parsing, console
//! output and exit codes.

pub mod reporter;

use clap::Parser;
use reporter::ConsoleReporter;
use sr_core::engine::{RunnerError, StageRunner};
use sr_core::executor::ProcessExecutor;
use std::process::ExitCode;

/// Run build stages by name, in order.
#[derive(Parser, Debug)]
#[command(name = "stagerun", version, about, long_about = None)]
pub struct Cli {
    /// Stages to run: clean, init, build, test
    #[arg(short, long, required = true, num_args = 1.., value_name = "STAGE")]
    pub stages: Vec<String>,
}

/// Run the requested stages in the current directory and map the outcome
/// to a process exit code.
pub async fn run(cli: Cli) -> color_eyre::Result<ExitCode> {
    let mut runner = StageRunner::new(ProcessExecutor::new(), ConsoleReporter::new());

    match runner.run(&cli.stages).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already reported on stdout by the reporter.
        Err(e @ RunnerError::UnknownStage(_)) => Ok(ExitCode::from(e.exit_code())),
    }
}
