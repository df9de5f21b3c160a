//! Generation dispatch
//!
//! Hands an assembled document to the backend registered for the request's
//! target. Holds no state between invocations.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{GenerationDocument, GenerationRequest, Schema};
use crate::domain::ports::{FileSystem, GenerationBackend, GenerationJob};
use crate::domain::value_objects::Target;
use crate::error::{GenError, GenResult};

#[derive(Debug, Serialize)]
struct OperationIdEntry<'a> {
    name: &'a str,
    source: String,
}

/// Routes generation jobs to per-target backends
pub struct GenerationDispatcher<F: FileSystem> {
    backends: HashMap<Target, Box<dyn GenerationBackend>>,
    fs: F,
    project_root: PathBuf,
}

impl<F: FileSystem> GenerationDispatcher<F> {
    pub fn new(fs: F, project_root: impl Into<PathBuf>) -> Self {
        Self {
            backends: HashMap::new(),
            fs,
            project_root: project_root.into(),
        }
    }

    /// Register `backend` for `target`, replacing any previous one
    pub fn with_backend(mut self, target: Target, backend: Box<dyn GenerationBackend>) -> Self {
        self.backends.insert(target, backend);
        self
    }

    /// Run the backend for `request.target` and return the number of files
    /// written, including the operation id manifest when requested.
    pub fn dispatch(
        &self,
        document: &GenerationDocument,
        schema: &Schema,
        request: &GenerationRequest,
    ) -> GenResult<usize> {
        let backend = self.backends.get(&request.target).ok_or_else(|| {
            GenError::generation(format!(
                "no backend registered for target '{}'",
                request.target
            ))
        })?;

        let job = GenerationJob {
            document,
            schema,
            project_root: &self.project_root,
            output_path: request.effective_output(),
            only: request.only.as_deref(),
            target: request.target,
            tag_identifier_name: &request.tag_name,
            relativize_output: request.output_is_inferred(),
            options: &request.options,
        };

        let mut written = backend.generate(&job)?;

        if let Some(path) = &request.options.operation_ids_path {
            self.write_operation_ids(document, path)?;
            written += 1;
        }

        Ok(written)
    }

    fn write_operation_ids(&self, document: &GenerationDocument, path: &Path) -> GenResult<()> {
        let entries: BTreeMap<String, OperationIdEntry<'_>> = document
            .operations()
            .iter()
            .map(|op| {
                (
                    document.operation_id(op).to_string(),
                    OperationIdEntry {
                        name: &op.name,
                        source: document.full_source(op),
                    },
                )
            })
            .collect();

        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| GenError::generation(e.to_string()))?;

        let target = self.project_root.join(path);
        self.fs
            .write(&target, &format!("{}\n", content))
            .map_err(|e| GenError::generation(format!("{}: {}", target.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{validate_request, GenerateArgs};
    use crate::domain::entities::{OperationDefinition, OperationKind};
    use crate::domain::ports::FsResult;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct MemoryFs {
        files: Rc<RefCell<BTreeMap<PathBuf, String>>>,
    }

    impl FileSystem for MemoryFs {
        fn read(&self, path: &Path) -> FsResult<String> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| crate::domain::ports::FsError::NotFound(path.to_path_buf()))
        }

        fn write(&self, path: &Path, content: &str) -> FsResult<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }
    }

    struct RecordingBackend {
        seen: Rc<RefCell<Vec<(PathBuf, bool, String)>>>,
        result: fn() -> GenResult<usize>,
    }

    impl GenerationBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        fn generate(&self, job: &GenerationJob<'_>) -> GenResult<usize> {
            self.seen.borrow_mut().push((
                job.output_path.to_path_buf(),
                job.relativize_output,
                job.tag_identifier_name.to_string(),
            ));
            (self.result)()
        }
    }

    fn schema() -> Schema {
        Schema {
            sdl: "type Query { me: String }".to_string(),
            query_type: Some("Query".to_string()),
            mutation_type: None,
            subscription_type: None,
            type_names: BTreeSet::from(["Query".to_string()]),
        }
    }

    fn document() -> GenerationDocument {
        GenerationDocument::new(
            vec![OperationDefinition {
                name: "Me".to_string(),
                kind: OperationKind::Query,
                source: "query Me { me }".to_string(),
                file_path: PathBuf::from("src/me.graphql"),
                line: 1,
                fragment_spreads: vec![],
            }],
            vec![],
        )
        .unwrap()
    }

    fn dispatcher(
        fs: MemoryFs,
        target: Target,
        result: fn() -> GenResult<usize>,
    ) -> (GenerationDispatcher<MemoryFs>, Rc<RefCell<Vec<(PathBuf, bool, String)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            seen: seen.clone(),
            result,
        };
        (
            GenerationDispatcher::new(fs, "/project").with_backend(target, Box::new(backend)),
            seen,
        )
    }

    #[test]
    fn dispatch_returns_backend_file_count() {
        let (dispatcher, seen) = dispatcher(MemoryFs::default(), Target::TypeScript, || Ok(3));
        let request = validate_request(&GenerateArgs::new("typescript")).unwrap();

        let written = dispatcher.dispatch(&document(), &schema(), &request).unwrap();

        assert_eq!(written, 3);
        let calls = seen.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("__generated__"));
        assert!(calls[0].1, "inferred output is relative to sources");
        assert_eq!(calls[0].2, "gql");
    }

    #[test]
    fn explicit_output_is_not_relativized() {
        let (dispatcher, seen) = dispatcher(MemoryFs::default(), Target::Swift, || Ok(1));
        let request = validate_request(&GenerateArgs::new("swift").with_output("API.swift")).unwrap();

        dispatcher.dispatch(&document(), &schema(), &request).unwrap();

        assert_eq!(seen.borrow()[0].0, PathBuf::from("API.swift"));
        assert!(!seen.borrow()[0].1);
    }

    #[test]
    fn missing_backend_is_a_generation_error() {
        let (dispatcher, _) = dispatcher(MemoryFs::default(), Target::Json, || Ok(1));
        let request = validate_request(&GenerateArgs::new("scala").with_output("out")).unwrap();

        let err = dispatcher.dispatch(&document(), &schema(), &request).unwrap_err();
        assert!(matches!(err, GenError::Generation { .. }));
    }

    #[test]
    fn backend_failure_is_surfaced() {
        let (dispatcher, _) = dispatcher(MemoryFs::default(), Target::Json, || {
            Err(GenError::generation("emitter crashed"))
        });
        let request = validate_request(&GenerateArgs::new("json").with_output("ops.json")).unwrap();

        let err = dispatcher.dispatch(&document(), &schema(), &request).unwrap_err();
        assert_eq!(err.to_string(), "code generation failed: emitter crashed");
    }

    #[test]
    fn operation_ids_file_is_written_and_counted() {
        let fs = MemoryFs::default();
        let (dispatcher, _) = dispatcher(fs.clone(), Target::Json, || Ok(1));
        let args = GenerateArgs {
            operation_ids_path: Some(PathBuf::from("ids.json")),
            ..GenerateArgs::new("json").with_output("ops.json")
        };
        let request = validate_request(&args).unwrap();
        let doc = document();

        let written = dispatcher.dispatch(&doc, &schema(), &request).unwrap();
        assert_eq!(written, 2);

        let content = fs.read(Path::new("/project/ids.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let id = doc.operation_id(&doc.operations()[0]).to_string();
        assert_eq!(parsed[&id]["name"], "Me");
        assert_eq!(parsed[&id]["source"], "query Me { me }");
    }
}
