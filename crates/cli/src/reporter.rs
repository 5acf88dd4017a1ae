//! Console output for stage events.

use colored::Colorize;
use sr_core::events::{StageEvent, StageReporter};
use std::io::Write;

/// Prints status lines to stdout and command failures to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl StageReporter for ConsoleReporter {
    fn report(&mut self, event: &StageEvent) {
        let line = event.to_string();
        match event {
            StageEvent::Planned(_) => println!("{}", line.bold()),
            StageEvent::Started(_) => {
                println!("{}", line.cyan());
                // The child inherits our stdout; get the announcement out first.
                let _ = std::io::stdout().flush();
            }
            StageEvent::Finished(_) => println!("{}", line.green()),
            StageEvent::CommandFailed { .. } => eprintln!("{}", line.yellow()),
            StageEvent::UnknownStage(_) => println!("{}", line.red().bold()),
        }
    }
}
