//! Executable document parsing with `graphql-parser`

use std::path::Path;

use graphql_parser::query::{self, Definition, Selection, SelectionSet, TypeCondition};

use crate::domain::entities::{FragmentDefinition, OperationDefinition, OperationKind};
use crate::error::Diagnostic;

use super::extract::Snippet;

/// Definitions and per-file problems found in one source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    pub operations: Vec<OperationDefinition>,
    pub fragments: Vec<FragmentDefinition>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse every snippet of a file. `file` is the project-relative path
/// recorded on definitions and diagnostics.
pub fn parse_file(file: &Path, snippets: &[Snippet]) -> ParsedFile {
    let mut parsed = ParsedFile::default();
    for snippet in snippets {
        parse_snippet(file, snippet, &mut parsed);
    }
    parsed
}

fn parse_snippet(file: &Path, snippet: &Snippet, parsed: &mut ParsedFile) {
    let document = match query::parse_query::<String>(&snippet.source) {
        Ok(document) => document,
        Err(e) => {
            parsed.diagnostics.push(diagnostic(
                file,
                snippet.line,
                format!("syntax error: {}", e.to_string().trim()),
            ));
            return;
        }
    };

    for definition in &document.definitions {
        let source = definition.to_string().trim_end().to_string();
        match definition {
            Definition::Operation(operation) => {
                let (name, kind, position, selection_set) = match operation {
                    query::OperationDefinition::SelectionSet(set) => {
                        (None, OperationKind::Query, set.span.0, set)
                    }
                    query::OperationDefinition::Query(q) => {
                        (q.name.as_ref(), OperationKind::Query, q.position, &q.selection_set)
                    }
                    query::OperationDefinition::Mutation(m) => (
                        m.name.as_ref(),
                        OperationKind::Mutation,
                        m.position,
                        &m.selection_set,
                    ),
                    query::OperationDefinition::Subscription(s) => (
                        s.name.as_ref(),
                        OperationKind::Subscription,
                        s.position,
                        &s.selection_set,
                    ),
                };
                let line = snippet.line + position.line - 1;

                let Some(name) = name else {
                    parsed.diagnostics.push(diagnostic(
                        file,
                        line,
                        "anonymous operations are not supported; give the operation a name",
                    ));
                    continue;
                };

                parsed.operations.push(OperationDefinition {
                    name: name.clone(),
                    kind,
                    source,
                    file_path: file.to_path_buf(),
                    line,
                    fragment_spreads: fragment_spreads(selection_set),
                });
            }
            Definition::Fragment(fragment) => {
                let TypeCondition::On(type_condition) = &fragment.type_condition;
                parsed.fragments.push(FragmentDefinition {
                    name: fragment.name.clone(),
                    type_condition: type_condition.clone(),
                    source,
                    file_path: file.to_path_buf(),
                    line: snippet.line + fragment.position.line - 1,
                    fragment_spreads: fragment_spreads(&fragment.selection_set),
                });
            }
        }
    }
}

/// Fragment names spread anywhere in `set`, first occurrence order
fn fragment_spreads(set: &SelectionSet<'_, String>) -> Vec<String> {
    let mut names = Vec::new();
    collect_spreads(set, &mut names);
    names
}

fn collect_spreads(set: &SelectionSet<'_, String>, names: &mut Vec<String>) {
    for selection in &set.items {
        match selection {
            Selection::Field(field) => collect_spreads(&field.selection_set, names),
            Selection::FragmentSpread(spread) => {
                if !names.contains(&spread.fragment_name) {
                    names.push(spread.fragment_name.clone());
                }
            }
            Selection::InlineFragment(inline) => collect_spreads(&inline.selection_set, names),
        }
    }
}

pub(crate) fn diagnostic(file: &Path, line: usize, message: impl Into<String>) -> Diagnostic {
    Diagnostic {
        file: file.to_path_buf(),
        line: Some(line),
        message: message.into(),
    }
}
