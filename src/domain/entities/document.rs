//! Generation document: the operations and fragments handed to a backend

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::ContentHash;
use crate::error::{GenError, GenResult};

/// Kind of a GraphQL operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// A named operation parsed from a project source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinition {
    pub name: String,
    pub kind: OperationKind,
    /// Printed GraphQL source of this definition alone
    pub source: String,
    pub file_path: PathBuf,
    /// 1-based line of the definition in `file_path`
    pub line: usize,
    /// Names of fragments spread directly by this operation
    pub fragment_spreads: Vec<String>,
}

/// A named fragment parsed from a project source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub source: String,
    pub file_path: PathBuf,
    pub line: usize,
    pub fragment_spreads: Vec<String>,
}

/// Borrowed view of one definition, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition<'a> {
    Operation(&'a OperationDefinition),
    Fragment(&'a FragmentDefinition),
}

/// Operations followed by fragments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationDocument {
    operations: Vec<OperationDefinition>,
    fragments: Vec<FragmentDefinition>,
}

impl GenerationDocument {
    pub fn new(
        operations: Vec<OperationDefinition>,
        fragments: Vec<FragmentDefinition>,
    ) -> GenResult<Self> {
        if operations.is_empty() && fragments.is_empty() {
            return Err(GenError::NoDefinitions);
        }
        Ok(Self {
            operations,
            fragments,
        })
    }

    pub fn operations(&self) -> &[OperationDefinition] {
        &self.operations
    }

    pub fn fragments(&self) -> &[FragmentDefinition] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.operations.len() + self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All definitions, operations first
    pub fn definitions(&self) -> impl Iterator<Item = Definition<'_>> {
        self.operations
            .iter()
            .map(Definition::Operation)
            .chain(self.fragments.iter().map(Definition::Fragment))
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.iter().find(|f| f.name == name)
    }

    /// Fragments reachable from `operation`, in depth-first discovery order.
    ///
    /// Spreads of fragments missing from the document are skipped.
    pub fn referenced_fragments(&self, operation: &OperationDefinition) -> Vec<&FragmentDefinition> {
        let by_name: HashMap<&str, &FragmentDefinition> =
            self.fragments.iter().map(|f| (f.name.as_str(), f)).collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut ordered = Vec::new();
        let mut stack: Vec<&str> = operation
            .fragment_spreads
            .iter()
            .rev()
            .map(String::as_str)
            .collect();

        while let Some(name) = stack.pop() {
            if !seen.insert(name) {
                continue;
            }
            if let Some(fragment) = by_name.get(name) {
                ordered.push(*fragment);
                stack.extend(fragment.fragment_spreads.iter().rev().map(String::as_str));
            }
        }
        ordered
    }

    /// Operation source followed by every fragment it needs
    pub fn full_source(&self, operation: &OperationDefinition) -> String {
        let mut source = operation.source.clone();
        for fragment in self.referenced_fragments(operation) {
            source.push('\n');
            source.push_str(&fragment.source);
        }
        source
    }

    /// Stable id of an operation: SHA-256 of its full source
    pub fn operation_id(&self, operation: &OperationDefinition) -> ContentHash {
        ContentHash::from_content(&self.full_source(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(name: &str, spreads: &[&str]) -> OperationDefinition {
        OperationDefinition {
            name: name.to_string(),
            kind: OperationKind::Query,
            source: format!("query {} {{ x }}", name),
            file_path: PathBuf::from("src/a.graphql"),
            line: 1,
            fragment_spreads: spreads.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn frag(name: &str, spreads: &[&str]) -> FragmentDefinition {
        FragmentDefinition {
            name: name.to_string(),
            type_condition: "User".to_string(),
            source: format!("fragment {} on User {{ id }}", name),
            file_path: PathBuf::from("src/b.graphql"),
            line: 1,
            fragment_spreads: spreads.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_document_is_rejected() {
        let err = GenerationDocument::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, GenError::NoDefinitions));
    }

    #[test]
    fn definitions_list_operations_before_fragments() {
        let doc = GenerationDocument::new(vec![op("A", &[])], vec![frag("F", &[])]).unwrap();
        let names: Vec<_> = doc
            .definitions()
            .map(|d| match d {
                Definition::Operation(o) => o.name.clone(),
                Definition::Fragment(f) => f.name.clone(),
            })
            .collect();
        assert_eq!(names, vec!["A", "F"]);
    }

    #[test]
    fn referenced_fragments_are_transitive_and_deduplicated() {
        let doc = GenerationDocument::new(
            vec![op("A", &["F1", "F2"])],
            vec![frag("F1", &["F3"]), frag("F2", &["F3"]), frag("F3", &[]), frag("Unused", &[])],
        )
        .unwrap();

        let names: Vec<_> = doc
            .referenced_fragments(&doc.operations()[0])
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["F1", "F3", "F2"]);
    }

    #[test]
    fn full_source_appends_fragment_sources() {
        let doc = GenerationDocument::new(vec![op("A", &["F"])], vec![frag("F", &[])]).unwrap();
        assert_eq!(
            doc.full_source(&doc.operations()[0]),
            "query A { x }\nfragment F on User { id }"
        );
    }

    #[test]
    fn operation_id_covers_fragments() {
        let with_fragment =
            GenerationDocument::new(vec![op("A", &["F"])], vec![frag("F", &[])]).unwrap();
        let without = GenerationDocument::new(vec![op("A", &["F"])], vec![]).unwrap();
        assert_ne!(
            with_fragment.operation_id(&with_fragment.operations()[0]),
            without.operation_id(&without.operations()[0])
        );
    }

    #[test]
    fn fragment_cycles_terminate() {
        let doc = GenerationDocument::new(
            vec![op("A", &["F1"])],
            vec![frag("F1", &["F2"]), frag("F2", &["F1"])],
        )
        .unwrap();
        assert_eq!(doc.referenced_fragments(&doc.operations()[0]).len(), 2);
    }
}
