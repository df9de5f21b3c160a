//! Generation Backends
//!
//! Concrete implementations of the GenerationBackend port:
//! - `JsonBackend` - built-in operation manifest for the `json` target
//! - `CommandBackend` - external emitter for every other target

mod command;
mod json;

pub use command::{default_command, CommandBackend};
pub use json::JsonBackend;

use crate::domain::ports::{FileSystem, GenerationBackend};
use crate::domain::value_objects::Target;
use crate::error::GenResult;

/// The backend for `target`. `command` overrides the external emitter and is
/// ignored for `json`.
pub fn backend_for<F>(target: Target, command: Option<&str>, fs: F) -> GenResult<Box<dyn GenerationBackend>>
where
    F: FileSystem + 'static,
{
    Ok(match (target, command) {
        (Target::Json, _) => Box::new(JsonBackend::new(fs)),
        (_, Some(command)) => Box::new(CommandBackend::new(command)?),
        (_, None) => Box::new(CommandBackend::for_target(target)),
    })
}
