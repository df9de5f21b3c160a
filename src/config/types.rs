//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::watch::DEBOUNCE_MS;
use crate::domain::entities::GENERATED_DIR;
use crate::error::GenResult;

use super::loader::{self, ConfigWarning};

/// Which project files hold GraphQL documents
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Include globs; empty means the built-in defaults
    #[serde(default)]
    pub includes: Vec<String>,

    /// Exclude globs; empty means the built-in defaults
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Template literal tag in JS/TS sources
    #[serde(default)]
    pub tag_name: Option<String>,
}

/// Where the schema comes from.
///
/// `local_file` accepts a single path or a list:
///   [schema]
///   local_file = "schema.graphql"
///
///   [schema]
///   local_file = ["schema.graphql", "extensions.graphql"]
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    pub local_file: Vec<PathBuf>,
    pub tags: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LocalFileDe {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

#[derive(Debug, Clone, Deserialize)]
struct SchemaConfigDe {
    #[serde(default)]
    local_file: Option<LocalFileDe>,
    #[serde(default)]
    tags: BTreeMap<String, PathBuf>,
}

impl<'de> Deserialize<'de> for SchemaConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = SchemaConfigDe::deserialize(deserializer)?;
        let local_file = match raw.local_file {
            None => Vec::new(),
            Some(LocalFileDe::One(path)) => vec![path],
            Some(LocalFileDe::Many(paths)) => paths,
        };
        Ok(Self {
            local_file,
            tags: raw.tags,
        })
    }
}

/// Watch mode tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Path substring marking generated output that must not retrigger
    #[serde(default = "default_generated_dir_marker")]
    pub generated_dir_marker: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            generated_dir_marker: default_generated_dir_marker(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEBOUNCE_MS
}

fn default_generated_dir_marker() -> String {
    GENERATED_DIR.to_string()
}

/// Generation defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GenerateConfig {
    /// External emitter used for every non-json target
    #[serde(default)]
    pub backend_command: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure (`gqlgen.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// environment overrides
    pub fn load_or_default(project_root: &Path) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (GQLGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
