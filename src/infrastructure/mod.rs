//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `project/` - Project loader (globs, extraction, parsing, validation)
//! - `schema/` - SDL schema resolver
//! - `backends/` - Built-in `json` backend and external emitters
//! - `watcher/` - `notify` file watcher
//! - `terminal` - Interactive and headless watch exit strategies

pub mod backends;
pub mod fs;
pub mod project;
pub mod schema;
pub mod terminal;
pub mod watcher;

// Re-export for convenience
pub use backends::{backend_for, CommandBackend, JsonBackend};
pub use fs::LocalFs;
pub use project::{FsProjectState, SourceMatcher};
pub use schema::LocalSchemaResolver;
pub use terminal::{InterruptFlag, KeypressExit, RunUntilKilled};
pub use watcher::{NotifySubscription, NotifyWatcher};
