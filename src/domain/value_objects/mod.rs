//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod source_patterns;
mod target;

pub use hash::ContentHash;
pub use source_patterns::{SourcePatterns, DEFAULT_EXCLUDES, DEFAULT_INCLUDES};
pub use target::Target;
