//! File-system backed project state

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::entities::{FragmentDefinition, OperationDefinition};
use crate::domain::ports::{FileSystem, ProjectState};
use crate::domain::value_objects::{ContentHash, SourcePatterns};
use crate::error::{Diagnostic, GenResult, ValidationError};

use super::extract::extract_snippets;
use super::matcher::SourceMatcher;
use super::parse::{diagnostic, parse_file, ParsedFile};

#[derive(Debug, Clone)]
struct CachedFile {
    hash: ContentHash,
    parsed: ParsedFile,
}

/// Project documents loaded from disk.
///
/// Parse results are cached per file and reused while the file's content
/// hash is unchanged.
pub struct FsProjectState<F: FileSystem> {
    fs: F,
    matcher: SourceMatcher,
    tag_name: String,
    cache: HashMap<PathBuf, CachedFile>,
    operations: Vec<OperationDefinition>,
    fragments: Vec<FragmentDefinition>,
}

impl<F: FileSystem> FsProjectState<F> {
    pub fn new(fs: F, patterns: &SourcePatterns, tag_name: impl Into<String>) -> GenResult<Self> {
        Ok(Self {
            fs,
            matcher: SourceMatcher::new(patterns)?,
            tag_name: tag_name.into(),
            cache: HashMap::new(),
            operations: Vec::new(),
            fragments: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        self.matcher.root()
    }

    /// Number of files with a cached parse
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(self.matcher.root()).unwrap_or(path)
    }

    /// Parse `path` unless its cached hash still matches
    fn refresh(&mut self, path: &Path, diagnostics: &mut Vec<Diagnostic>) {
        let content = match self.fs.read(path) {
            Ok(content) => content,
            Err(e) => {
                self.cache.remove(path);
                diagnostics.push(Diagnostic {
                    file: self.relative(path).to_path_buf(),
                    line: None,
                    message: e.to_string(),
                });
                return;
            }
        };

        let hash = ContentHash::from_content(&content);
        if self.cache.get(path).is_some_and(|cached| cached.hash == hash) {
            return;
        }

        let snippets = extract_snippets(path, &content, &self.tag_name);
        let parsed = parse_file(self.relative(path), &snippets);
        self.cache
            .insert(path.to_path_buf(), CachedFile { hash, parsed });
    }
}

impl<F: FileSystem> ProjectState for FsProjectState<F> {
    fn validate(&mut self) -> GenResult<()> {
        let files = self.matcher.walk();
        let present: HashSet<&PathBuf> = files.iter().collect();
        self.cache.retain(|path, _| present.contains(path));

        let mut diagnostics = Vec::new();
        for path in &files {
            self.refresh(path, &mut diagnostics);
        }

        let mut operations = Vec::new();
        let mut fragments = Vec::new();
        for path in &files {
            if let Some(cached) = self.cache.get(path) {
                operations.extend(cached.parsed.operations.iter().cloned());
                fragments.extend(cached.parsed.fragments.iter().cloned());
                diagnostics.extend(cached.parsed.diagnostics.iter().cloned());
            }
        }
        diagnostics.extend(cross_check(&operations, &fragments));

        self.operations = operations;
        self.fragments = fragments;

        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { diagnostics }.into())
        }
    }

    fn operations(&self) -> Vec<OperationDefinition> {
        self.operations.clone()
    }

    fn fragments(&self) -> Vec<FragmentDefinition> {
        self.fragments.clone()
    }

    fn file_did_change(&mut self, path: &Path) {
        self.cache.remove(path);
    }
}

/// Problems that span files: duplicate names and unknown spreads
fn cross_check(operations: &[OperationDefinition], fragments: &[FragmentDefinition]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let mut seen_operations: HashMap<&str, &Path> = HashMap::new();
    for op in operations {
        if let Some(first) = seen_operations.insert(&op.name, &op.file_path) {
            diagnostics.push(diagnostic(
                &op.file_path,
                op.line,
                format!(
                    "duplicate operation name '{}' (also defined in {})",
                    op.name,
                    first.display()
                ),
            ));
        }
    }

    let mut seen_fragments: HashMap<&str, &Path> = HashMap::new();
    for fragment in fragments {
        if let Some(first) = seen_fragments.insert(&fragment.name, &fragment.file_path) {
            diagnostics.push(diagnostic(
                &fragment.file_path,
                fragment.line,
                format!(
                    "duplicate fragment name '{}' (also defined in {})",
                    fragment.name,
                    first.display()
                ),
            ));
        }
    }

    let spreads = operations
        .iter()
        .map(|op| (&op.file_path, op.line, &op.fragment_spreads))
        .chain(
            fragments
                .iter()
                .map(|f| (&f.file_path, f.line, &f.fragment_spreads)),
        );
    for (file, line, names) in spreads {
        for name in names {
            if !seen_fragments.contains_key(name.as_str()) {
                diagnostics.push(diagnostic(file, line, format!("unknown fragment '{}'", name)));
            }
        }
    }

    diagnostics
}
