//! Command execution layer.
//!
//! The runner never spawns processes itself; it hands each
//! [`ExternalCommand`](crate::stage::ExternalCommand) to a [`CommandExecutor`].
//! [`ProcessExecutor`] is the implementation that talks to the host OS.

pub mod base;
pub mod process_executor;

pub use base::{CommandExecutor, CommandStatus, ExecutorError};
pub use process_executor::ProcessExecutor;
