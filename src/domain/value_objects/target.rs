//! Target value object - defines which language to generate code for

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Code generation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Operation manifest (built-in)
    Json,
    /// Swift (Apollo iOS style)
    Swift,
    /// TypeScript type definitions
    TypeScript,
    /// Flow type definitions
    Flow,
    /// Scala
    Scala,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::Json,
        Target::Swift,
        Target::TypeScript,
        Target::Flow,
        Target::Scala,
    ];

    /// Targets that generate into `__generated__` directories next to sources
    /// when no output is given.
    pub fn allows_inferred_output(&self) -> bool {
        matches!(self, Target::TypeScript | Target::Flow)
    }

    /// Name used on the command line and in config
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Json => "json",
            Target::Swift => "swift",
            Target::TypeScript => "typescript",
            Target::Flow => "flow",
            Target::Scala => "scala",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Json => "JSON",
            Target::Swift => "Swift",
            Target::TypeScript => "TypeScript",
            Target::Flow => "Flow",
            Target::Scala => "Scala",
        }
    }
}

impl FromStr for Target {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnsupportedTarget {
                target: s.to_string(),
            })
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
