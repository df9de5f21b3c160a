//! Document assembly from project state

use crate::domain::entities::GenerationDocument;
use crate::domain::ports::ProjectState;
use crate::error::GenResult;

/// Validate the project and build a fresh generation document.
///
/// Validation failures pass through unchanged. Fails with
/// `GenError::NoDefinitions` when the project has neither operations nor
/// fragments.
pub fn assemble_document<P: ProjectState + ?Sized>(project: &mut P) -> GenResult<GenerationDocument> {
    project.validate()?;
    GenerationDocument::new(project.operations(), project.fragments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{FragmentDefinition, OperationDefinition, OperationKind};
    use crate::error::{Diagnostic, GenError, ValidationError};
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct FakeProject {
        operations: Vec<OperationDefinition>,
        fragments: Vec<FragmentDefinition>,
        invalid: bool,
        validated: usize,
    }

    impl ProjectState for FakeProject {
        fn validate(&mut self) -> GenResult<()> {
            self.validated += 1;
            if self.invalid {
                return Err(ValidationError {
                    diagnostics: vec![Diagnostic {
                        file: PathBuf::from("src/a.graphql"),
                        line: Some(1),
                        message: "Syntax Error".to_string(),
                    }],
                }
                .into());
            }
            Ok(())
        }

        fn operations(&self) -> Vec<OperationDefinition> {
            self.operations.clone()
        }

        fn fragments(&self) -> Vec<FragmentDefinition> {
            self.fragments.clone()
        }

        fn file_did_change(&mut self, _path: &Path) {}
    }

    fn operation(name: &str) -> OperationDefinition {
        OperationDefinition {
            name: name.to_string(),
            kind: OperationKind::Query,
            source: format!("query {} {{ me {{ id }} }}", name),
            file_path: PathBuf::from("src/a.graphql"),
            line: 1,
            fragment_spreads: vec![],
        }
    }

    fn fragment(name: &str) -> FragmentDefinition {
        FragmentDefinition {
            name: name.to_string(),
            type_condition: "User".to_string(),
            source: format!("fragment {} on User {{ id }}", name),
            file_path: PathBuf::from("src/a.graphql"),
            line: 5,
            fragment_spreads: vec![],
        }
    }

    #[test]
    fn empty_project_fails_with_no_definitions() {
        let mut project = FakeProject::default();
        let err = assemble_document(&mut project).unwrap_err();
        assert!(matches!(err, GenError::NoDefinitions));
    }

    #[test]
    fn fragments_alone_are_enough() {
        let mut project = FakeProject {
            fragments: vec![fragment("UserFields")],
            ..FakeProject::default()
        };
        let doc = assemble_document(&mut project).unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn operations_precede_fragments() {
        let mut project = FakeProject {
            operations: vec![operation("Me"), operation("Viewer")],
            fragments: vec![fragment("UserFields")],
            ..FakeProject::default()
        };
        let doc = assemble_document(&mut project).unwrap();
        let names: Vec<_> = doc
            .operations()
            .iter()
            .map(|o| o.name.as_str())
            .chain(doc.fragments().iter().map(|f| f.name.as_str()))
            .collect();
        assert_eq!(names, vec!["Me", "Viewer", "UserFields"]);
    }

    #[test]
    fn validation_failure_passes_through() {
        let mut project = FakeProject {
            operations: vec![operation("Me")],
            invalid: true,
            ..FakeProject::default()
        };
        let err = assemble_document(&mut project).unwrap_err();
        assert!(matches!(err, GenError::Validation(_)));
    }

    #[test]
    fn every_assembly_validates_first() {
        let mut project = FakeProject {
            operations: vec![operation("Me")],
            ..FakeProject::default()
        };
        assemble_document(&mut project).unwrap();
        assemble_document(&mut project).unwrap();
        assert_eq!(project.validated, 2);
    }
}
