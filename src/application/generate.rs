//! Generate Use Case
//!
//! The one-shot pipeline: assemble the document, resolve the schema,
//! dispatch to the backend. Watch mode repeats it through `Regenerate`.

use std::path::Path;

use crate::application::assemble::assemble_document;
use crate::application::dispatch::GenerationDispatcher;
use crate::application::watch::Regenerate;
use crate::domain::entities::GenerationRequest;
use crate::domain::ports::{FileSystem, ProjectState, SchemaResolver};
use crate::error::GenResult;

/// Outcome of one generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub files_written: usize,
    pub operations: usize,
    pub fragments: usize,
}

/// One-shot generate events for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GenerateEvent {
    GenerationStarted { target: String, output: String },
    GenerationComplete {
        files_written: usize,
        operations: usize,
        fragments: usize,
    },
}

impl GenerateEvent {
    pub fn started(request: &GenerationRequest) -> Self {
        GenerateEvent::GenerationStarted {
            target: request.target.as_str().to_string(),
            output: request.effective_output().display().to_string(),
        }
    }

    pub fn complete(report: &GenerateReport) -> Self {
        GenerateEvent::GenerationComplete {
            files_written: report.files_written,
            operations: report.operations,
            fragments: report.fragments,
        }
    }

    /// Convert to JSON string with "command": "generate" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("generate"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

pub struct GenerateUseCase<P, R, F>
where
    P: ProjectState,
    R: SchemaResolver,
    F: FileSystem,
{
    project: P,
    resolver: R,
    dispatcher: GenerationDispatcher<F>,
    request: GenerationRequest,
}

impl<P, R, F> GenerateUseCase<P, R, F>
where
    P: ProjectState,
    R: SchemaResolver,
    F: FileSystem,
{
    pub fn new(
        project: P,
        resolver: R,
        dispatcher: GenerationDispatcher<F>,
        request: GenerationRequest,
    ) -> Self {
        Self {
            project,
            resolver,
            dispatcher,
            request,
        }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Run the pipeline once against current project state
    pub fn run_once(&mut self) -> GenResult<GenerateReport> {
        let document = assemble_document(&mut self.project)?;
        let schema = self.resolver.resolve(self.request.tag.as_deref())?;
        let files_written = self.dispatcher.dispatch(&document, &schema, &self.request)?;

        Ok(GenerateReport {
            files_written,
            operations: document.operations().len(),
            fragments: document.fragments().len(),
        })
    }
}

impl<P, R, F> Regenerate for GenerateUseCase<P, R, F>
where
    P: ProjectState,
    R: SchemaResolver,
    F: FileSystem,
{
    fn file_did_change(&mut self, path: &Path) {
        self.project.file_did_change(path);
    }

    fn regenerate(&mut self) -> GenResult<usize> {
        self.run_once().map(|report| report.files_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{validate_request, GenerateArgs};
    use crate::domain::entities::{FragmentDefinition, OperationDefinition, OperationKind, Schema};
    use crate::domain::ports::{FsResult, GenerationBackend, GenerationJob};
    use crate::domain::value_objects::Target;
    use crate::error::GenError;
    use std::cell::Cell;
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct NullFs;

    impl FileSystem for NullFs {
        fn read(&self, path: &Path) -> FsResult<String> {
            Err(crate::domain::ports::FsError::NotFound(path.to_path_buf()))
        }
        fn write(&self, _path: &Path, _content: &str) -> FsResult<()> {
            Ok(())
        }
        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    struct OneOperation {
        changed: Vec<PathBuf>,
    }

    impl ProjectState for OneOperation {
        fn validate(&mut self) -> GenResult<()> {
            Ok(())
        }
        fn operations(&self) -> Vec<OperationDefinition> {
            vec![OperationDefinition {
                name: "Me".to_string(),
                kind: OperationKind::Query,
                source: "query Me { me }".to_string(),
                file_path: PathBuf::from("src/me.graphql"),
                line: 1,
                fragment_spreads: vec![],
            }]
        }
        fn fragments(&self) -> Vec<FragmentDefinition> {
            vec![]
        }
        fn file_did_change(&mut self, path: &Path) {
            self.changed.push(path.to_path_buf());
        }
    }

    struct CountingResolver {
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl SchemaResolver for CountingResolver {
        fn resolve(&self, _tag: Option<&str>) -> GenResult<Schema> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(GenError::schema_load("schema.graphql not found"));
            }
            Ok(Schema {
                sdl: "type Query { me: String }".to_string(),
                query_type: Some("Query".to_string()),
                mutation_type: None,
                subscription_type: None,
                type_names: BTreeSet::from(["Query".to_string()]),
            })
        }
    }

    struct FixedBackend;

    impl GenerationBackend for FixedBackend {
        fn name(&self) -> &str {
            "fixed"
        }
        fn generate(&self, job: &GenerationJob<'_>) -> GenResult<usize> {
            Ok(job.document.operations().len())
        }
    }

    fn use_case(fail: bool) -> (GenerateUseCase<OneOperation, CountingResolver, NullFs>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let request = validate_request(&GenerateArgs::new("json").with_output("ops.json")).unwrap();
        let dispatcher = GenerationDispatcher::new(NullFs, "/project")
            .with_backend(Target::Json, Box::new(FixedBackend));
        (
            GenerateUseCase::new(
                OneOperation { changed: vec![] },
                CountingResolver {
                    calls: calls.clone(),
                    fail,
                },
                dispatcher,
                request,
            ),
            calls,
        )
    }

    #[test]
    fn run_once_reports_counts() {
        let (mut use_case, calls) = use_case(false);
        let report = use_case.run_once().unwrap();
        assert_eq!(
            report,
            GenerateReport {
                files_written: 1,
                operations: 1,
                fragments: 0
            }
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn schema_is_resolved_on_every_pass() {
        let (mut use_case, calls) = use_case(false);
        use_case.run_once().unwrap();
        use_case.regenerate().unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn schema_failure_is_surfaced() {
        let (mut use_case, _) = use_case(true);
        let err = use_case.run_once().unwrap_err();
        assert!(matches!(err, GenError::SchemaLoad { .. }));
    }

    #[test]
    fn file_changes_reach_project_state() {
        let (mut use_case, _) = use_case(false);
        use_case.file_did_change(Path::new("/project/src/me.graphql"));
        assert_eq!(use_case.project.changed, vec![PathBuf::from("/project/src/me.graphql")]);
    }

    #[test]
    fn generate_events_serialize_with_command() {
        let request = validate_request(&GenerateArgs::new("swift").with_output("API.swift")).unwrap();
        let started: serde_json::Value =
            serde_json::from_str(&GenerateEvent::started(&request).to_json()).unwrap();
        assert_eq!(started["event"], "generation_started");
        assert_eq!(started["command"], "generate");
        assert_eq!(started["target"], "swift");
        assert_eq!(started["output"], "API.swift");

        let report = GenerateReport {
            files_written: 2,
            operations: 3,
            fragments: 1,
        };
        let complete: serde_json::Value =
            serde_json::from_str(&GenerateEvent::complete(&report).to_json()).unwrap();
        assert_eq!(complete["event"], "generation_complete");
        assert_eq!(complete["files_written"], 2);
        assert_eq!(complete["operations"], 3);
    }
}
