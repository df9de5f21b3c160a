//! gqlgen - GraphQL operation code generator
//!
//! Collects the named operations and fragments of a project, resolves the
//! schema, and hands both to a per-target backend. Watch mode regenerates
//! whenever a source file changes.
//!
//! ## Layers
//!
//! - `domain`: entities, value objects and the ports the rest plugs into
//! - `application`: request validation, assembly, dispatch, watch controller
//! - `infrastructure`: file system, project loader, schema, backends, watcher
//! - `presentation`: CLI definition and dependency wiring
//! - `config`: `gqlgen.toml` loading

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{validate_request, GenerateArgs, GenerateUseCase};
pub use config::Config;
pub use domain::entities::GenerationRequest;
pub use domain::value_objects::Target;
pub use error::{ConfigurationError, GenError, GenResult};
