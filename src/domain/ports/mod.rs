//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod file_watcher;
pub mod generation_backend;
pub mod project_state;
pub mod schema_resolver;

pub use file_system::{FileSystem, FsError, FsResult};
pub use file_watcher::{FileWatcher, RegenerationTrigger, Subscription, TriggerKind};
pub use generation_backend::{GenerationBackend, GenerationJob};
pub use project_state::ProjectState;
pub use schema_resolver::SchemaResolver;
