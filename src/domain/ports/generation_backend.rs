//! GenerationBackend port - per-target code emitters

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{GenerationDocument, OptionSet, Schema};
use crate::domain::value_objects::Target;
use crate::error::GenResult;

/// Everything a backend needs for one generation pass
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationJob<'a> {
    pub document: &'a GenerationDocument,
    pub schema: &'a Schema,
    /// Absolute project root; relative paths in the job resolve against it
    pub project_root: &'a Path,
    pub output_path: &'a Path,
    pub only: Option<&'a Path>,
    pub target: Target,
    pub tag_identifier_name: &'a str,
    /// Output goes next to each source file instead of under `output_path`
    pub relativize_output: bool,
    pub options: &'a OptionSet,
}

/// A code emitter for one or more targets
pub trait GenerationBackend {
    /// Short name for diagnostics
    fn name(&self) -> &str;

    /// Write generated files and return how many were written.
    ///
    /// Failures surface as `GenError::Generation`.
    fn generate(&self, job: &GenerationJob<'_>) -> GenResult<usize>;
}
