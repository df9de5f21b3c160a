//! Include/exclude matching for project source files
//!
//! Patterns use gitignore semantics relative to the project root. Shared by
//! the project loader and the file watcher so both agree on what a source
//! file is.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::domain::value_objects::SourcePatterns;
use crate::error::{GenError, GenResult};

#[derive(Debug, Clone)]
pub struct SourceMatcher {
    root: PathBuf,
    include_globs: Vec<String>,
    includes: Gitignore,
    excludes: Gitignore,
}

impl SourceMatcher {
    pub fn new(patterns: &SourcePatterns) -> GenResult<Self> {
        Ok(Self {
            root: patterns.root.clone(),
            include_globs: patterns.includes.clone(),
            includes: build(&patterns.root, &patterns.includes)?,
            excludes: build(&patterns.root, &patterns.excludes)?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True if `path` is a file under the root that an include matches and
    /// no exclude matches
    pub fn is_source(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }
        if !self.includes.matched(relative, false).is_ignore() {
            return false;
        }
        !self
            .excludes
            .matched_path_or_any_parents(relative, false)
            .is_ignore()
    }

    /// Directories that can hold sources: the literal leading directories
    /// of each include glob, or the root for globs that match at any depth.
    /// Missing directories fall back to their nearest existing ancestor.
    pub fn watch_roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = self
            .include_globs
            .iter()
            .filter_map(|glob| literal_base(glob))
            .map(|base| nearest_existing(&self.root, self.root.join(base)))
            .collect();
        roots.sort();
        roots.dedup();

        let mut kept: Vec<PathBuf> = Vec::new();
        for root in roots {
            if !kept.iter().any(|k| root.starts_with(k)) {
                kept.push(root);
            }
        }
        kept
    }

    /// True if `dir` is excluded and nothing below it needs visiting
    fn is_excluded_dir(&self, dir: &Path) -> bool {
        let Ok(relative) = dir.strip_prefix(&self.root) else {
            return false;
        };
        !relative.as_os_str().is_empty()
            && self
                .excludes
                .matched_path_or_any_parents(relative, true)
                .is_ignore()
    }

    /// All matching files under the watch roots, sorted. Excluded
    /// directories are pruned, not descended.
    pub fn walk(&self) -> Vec<PathBuf> {
        let roots = self.watch_roots();
        let Some((first, rest)) = roots.split_first() else {
            return Vec::new();
        };

        let mut builder = ignore::WalkBuilder::new(first);
        for root in rest {
            builder.add(root);
        }
        let pruner = self.clone();
        builder
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                !(entry.file_type().is_some_and(|ft| ft.is_dir())
                    && pruner.is_excluded_dir(entry.path()))
            });

        let mut files: Vec<PathBuf> = builder
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| self.is_source(path))
            .collect();
        files.sort();
        files.dedup();
        files
    }
}

/// Leading glob-free directories of an include pattern, relative to the
/// root. `None` for negations. Patterns without an inner slash match at
/// any depth, so their base is the root itself.
fn literal_base(glob: &str) -> Option<PathBuf> {
    if glob.starts_with('!') {
        return None;
    }
    let anchored = glob.trim_start_matches('/').trim_end_matches('/');
    if !anchored.contains('/') {
        return Some(PathBuf::new());
    }

    let segments: Vec<&str> = anchored.split('/').collect();
    let base = segments[..segments.len() - 1]
        .iter()
        .take_while(|segment| !segment.contains(['*', '?', '[', '{', '\\']))
        .collect::<PathBuf>();
    Some(base)
}

fn nearest_existing(root: &Path, mut dir: PathBuf) -> PathBuf {
    while !dir.is_dir() && dir != root {
        if !dir.pop() {
            return root.to_path_buf();
        }
    }
    dir
}

fn build(root: &Path, globs: &[String]) -> GenResult<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    for glob in globs {
        builder
            .add_line(None, glob)
            .map_err(|e| invalid_glob(glob, &e))?;
    }
    builder.build().map_err(|e| GenError::Config {
        file: root.to_path_buf(),
        message: e.to_string(),
    })
}

fn invalid_glob(glob: &str, err: &ignore::Error) -> GenError {
    GenError::Config {
        file: PathBuf::from(glob),
        message: format!("invalid glob pattern: {}", err),
    }
}
