//! Project loader
//!
//! Implements the `ProjectState` port over files on disk: walks the include
//! globs, extracts GraphQL from `.graphql` files and tagged JS/TS template
//! literals, and validates the result.

mod extract;
mod matcher;
mod parse;
mod state;


pub use extract::{extract_snippets, Snippet};
pub use matcher::SourceMatcher;
pub use state::FsProjectState;
