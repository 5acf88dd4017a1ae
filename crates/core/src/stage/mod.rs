//! Stage names and the external commands they map to.

pub mod command;
pub mod stage_name;

pub use command::ExternalCommand;
pub use stage_name::{ParseStageError, StageName};
