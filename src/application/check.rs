//! Check Use Case
//!
//! Validates project documents and resolves the schema without generating.

use crate::application::assemble::assemble_document;
use crate::domain::ports::{ProjectState, SchemaResolver};
use crate::error::{Diagnostic, GenResult, ValidationError};

/// Result of a successful check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub operations: usize,
    pub fragments: usize,
    pub schema_types: usize,
}

pub struct CheckUseCase<P: ProjectState, R: SchemaResolver> {
    project: P,
    resolver: R,
}

impl<P: ProjectState, R: SchemaResolver> CheckUseCase<P, R> {
    pub fn new(project: P, resolver: R) -> Self {
        Self { project, resolver }
    }

    /// Validate documents, resolve the schema, and make sure every
    /// operation's root type exists in it
    pub fn execute(&mut self, tag: Option<&str>) -> GenResult<CheckReport> {
        let document = assemble_document(&mut self.project)?;
        let schema = self.resolver.resolve(tag)?;

        let diagnostics: Vec<Diagnostic> = document
            .operations()
            .iter()
            .filter(|op| schema.root_type(op.kind).is_none())
            .map(|op| Diagnostic {
                file: op.file_path.clone(),
                line: Some(op.line),
                message: format!(
                    "schema does not define a {} root type (operation '{}')",
                    op.kind.as_str(),
                    op.name
                ),
            })
            .collect();

        if !diagnostics.is_empty() {
            return Err(ValidationError { diagnostics }.into());
        }

        Ok(CheckReport {
            operations: document.operations().len(),
            fragments: document.fragments().len(),
            schema_types: schema.type_names.len(),
        })
    }
}
