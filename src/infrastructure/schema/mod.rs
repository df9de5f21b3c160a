//! Schema Resolvers
//!
//! Concrete implementations of the SchemaResolver port.

mod local;

pub use local::{parse_sdl, LocalSchemaResolver, CURRENT_TAG};
