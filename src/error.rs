//! Error types for gqlgen
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gqlgen operations
pub type GenResult<T> = Result<T, GenError>;

/// Invalid flag/argument combination. Always fatal, raised before any I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Target string is not one of the recognized targets
    #[error("unsupported target '{target}' (expected one of: json, swift, typescript, flow, scala)")]
    UnsupportedTarget { target: String },

    /// Target needs an explicit output path
    #[error("output path required for this target: '{target}' writes to an explicit file or directory")]
    OutputRequired { target: String },

    /// TypeScript/Flow output without --output-flat must be a bare directory name
    #[error(
        "output must be empty or a single directory name unless outputFlat is set (got '{}'); \
         use --output-flat to write a single file",
        .output.display()
    )]
    OutputNotDirectoryName { output: PathBuf },
}

/// One problem found in the project's GraphQL documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub line: Option<usize>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.file.display(), line, self.message),
            None => write!(f, "{}: {}", self.file.display(), self.message),
        }
    }
}

/// Malformed query-language documents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.diagnostics.len();
        write!(
            f,
            "validation failed with {} {}",
            count,
            if count == 1 { "error" } else { "errors" }
        )?;
        for diagnostic in &self.diagnostics {
            write!(f, "\n  {}", diagnostic)?;
        }
        Ok(())
    }
}

/// Main error type for gqlgen operations
#[derive(Error, Debug)]
pub enum GenError {
    /// Invalid flag/argument combination
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Schema could not be resolved
    #[error("failed to load schema: {message}")]
    SchemaLoad { message: String },

    /// Nothing to generate
    #[error("No operations or fragments found to generate code for.")]
    NoDefinitions,

    /// Malformed documents in the project
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend failure
    #[error("code generation failed: {message}")]
    Generation { message: String },

    /// Invalid configuration file
    #[error("invalid config in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// File watcher could not be set up
    #[error("file watcher error: {message}")]
    Watch { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    pub fn schema_load(message: impl Into<String>) -> Self {
        GenError::SchemaLoad {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        GenError::Generation {
            message: message.into(),
        }
    }
}

impl From<notify::Error> for GenError {
    fn from(err: notify::Error) -> Self {
        GenError::Watch {
            message: err.to_string(),
        }
    }
}
