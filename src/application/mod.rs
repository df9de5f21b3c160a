//! Application Layer
//!
//! Use cases that orchestrate the generation flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `validate_request` - Turn raw flags into a `GenerationRequest`
//! - `GenerateUseCase` - Assemble, resolve schema, dispatch to a backend
//! - `CheckUseCase` - Validate documents against the schema without writing
//! - `watch::WatchController` - Regenerate on source changes

mod assemble;
pub mod check;
mod dispatch;
pub mod generate;
mod validate;
pub mod watch;

pub use assemble::assemble_document;
pub use check::{CheckReport, CheckUseCase};
pub use dispatch::GenerationDispatcher;
pub use generate::{GenerateEvent, GenerateReport, GenerateUseCase};
pub use validate::{validate_request, GenerateArgs};
