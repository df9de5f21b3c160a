//! Source patterns - which project files hold GraphQL documents

use std::path::PathBuf;

/// Default include globs, relative to the project root
pub const DEFAULT_INCLUDES: &[&str] = &["src/**/*.{graphql,gql,js,jsx,ts,tsx}"];

/// Default exclude globs, relative to the project root
pub const DEFAULT_EXCLUDES: &[&str] = &["**/node_modules/**", "**/__tests__/**"];

/// Project root plus gitignore-style include/exclude globs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePatterns {
    pub root: PathBuf,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl SourcePatterns {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            includes: DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace includes; an empty list keeps the defaults
    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        if !includes.is_empty() {
            self.includes = includes;
        }
        self
    }

    /// Replace excludes; an empty list keeps the defaults
    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        if !excludes.is_empty() {
            self.excludes = excludes;
        }
        self
    }
}
