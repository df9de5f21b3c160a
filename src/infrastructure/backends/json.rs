//! Built-in `json` backend
//!
//! Writes an operation manifest: every operation with its root type, id and
//! full source, plus every fragment.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{FragmentDefinition, GenerationDocument, OperationDefinition, Schema};
use crate::domain::ports::{FileSystem, GenerationBackend, GenerationJob};
use crate::error::{GenError, GenResult};

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    operations: Vec<OperationEntry<'a>>,
    fragments: Vec<FragmentEntry<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationEntry<'a> {
    file_path: &'a Path,
    operation_name: &'a str,
    operation_type: &'static str,
    root_type: &'a str,
    operation_id: String,
    source: String,
    fragments_referenced: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FragmentEntry<'a> {
    file_path: &'a Path,
    fragment_name: &'a str,
    type_condition: &'a str,
    source: &'a str,
}

pub struct JsonBackend<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> JsonBackend<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> GenerationBackend for JsonBackend<F> {
    fn name(&self) -> &str {
        "json"
    }

    fn generate(&self, job: &GenerationJob<'_>) -> GenResult<usize> {
        let manifest = build_manifest(job.document, job.schema, job.project_root, job.only)?;
        let content = serde_json::to_string_pretty(&manifest)
            .map_err(|e| GenError::generation(e.to_string()))?;

        let target = job.project_root.join(job.output_path);
        self.fs
            .write(&target, &format!("{}\n", content))
            .map_err(|e| GenError::generation(format!("{}: {}", target.display(), e)))?;
        Ok(1)
    }
}

fn build_manifest<'a>(
    document: &'a GenerationDocument,
    schema: &'a Schema,
    project_root: &Path,
    only: Option<&Path>,
) -> GenResult<Manifest<'a>> {
    let operations = document
        .operations()
        .iter()
        .filter(|op| only.map_or(true, |only| is_same_file(project_root, &op.file_path, only)))
        .map(|op| operation_entry(document, schema, op))
        .collect::<GenResult<Vec<_>>>()?;

    let fragments = document.fragments().iter().map(fragment_entry).collect();

    Ok(Manifest {
        operations,
        fragments,
    })
}

fn operation_entry<'a>(
    document: &'a GenerationDocument,
    schema: &'a Schema,
    op: &'a OperationDefinition,
) -> GenResult<OperationEntry<'a>> {
    let root_type = schema.root_type(op.kind).ok_or_else(|| {
        GenError::generation(format!(
            "schema has no {} type for operation '{}' in {}",
            op.kind.as_str(),
            op.name,
            op.file_path.display()
        ))
    })?;

    Ok(OperationEntry {
        file_path: &op.file_path,
        operation_name: &op.name,
        operation_type: op.kind.as_str(),
        root_type,
        operation_id: document.operation_id(op).to_string(),
        source: document.full_source(op),
        fragments_referenced: document
            .referenced_fragments(op)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect(),
    })
}

fn fragment_entry(fragment: &FragmentDefinition) -> FragmentEntry<'_> {
    FragmentEntry {
        file_path: &fragment.file_path,
        fragment_name: &fragment.name,
        type_condition: &fragment.type_condition,
        source: &fragment.source,
    }
}

/// `only` may be project-relative or absolute
fn is_same_file(project_root: &Path, file: &Path, only: &Path) -> bool {
    file == only || project_root.join(file) == project_root.join(only)
}
