//! ProjectState port - the parsed operations and fragments of a project

use std::path::Path;

use crate::domain::entities::{FragmentDefinition, OperationDefinition};
use crate::error::GenResult;

/// Parsed project documents.
///
/// `validate` refreshes the state from disk and must run before the
/// collections are read. Both collections come back in project order
/// (file path, then position in the file).
pub trait ProjectState {
    /// Refresh and check all documents; fails with `GenError::Validation`
    fn validate(&mut self) -> GenResult<()>;

    fn operations(&self) -> Vec<OperationDefinition>;

    fn fragments(&self) -> Vec<FragmentDefinition>;

    /// Invalidate cached parse state for `path`
    fn file_did_change(&mut self, path: &Path);
}
