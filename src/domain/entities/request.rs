//! Generation request and the options handed to backends

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::Target;

/// Directory name used when TypeScript/Flow output is placed next to sources
pub const GENERATED_DIR: &str = "__generated__";

/// Default tag for GraphQL template literals in JS/TS sources
pub const DEFAULT_TAG_NAME: &str = "gql";

/// Target-specific generation toggles.
///
/// Built once by the request validator and only ever shared by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    pub passthrough_custom_scalars: bool,
    pub custom_scalars_prefix: Option<String>,
    pub add_typename: bool,
    pub namespace: Option<String>,
    pub operation_ids_path: Option<PathBuf>,
    pub merge_in_fields_from_fragment_spreads: bool,
    pub use_flow_exact_objects: bool,
    pub use_read_only_types: bool,
    pub global_types_file: Option<PathBuf>,
    pub ts_file_extension: Option<String>,
    pub suppress_swift_multiline_string_literals: bool,
    pub omit_deprecated_enum_cases: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            passthrough_custom_scalars: false,
            custom_scalars_prefix: None,
            add_typename: true,
            namespace: None,
            operation_ids_path: None,
            merge_in_fields_from_fragment_spreads: false,
            use_flow_exact_objects: false,
            use_read_only_types: false,
            global_types_file: None,
            ts_file_extension: None,
            suppress_swift_multiline_string_literals: false,
            omit_deprecated_enum_cases: false,
        }
    }
}

/// A validated generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub target: Target,
    pub output_path: Option<PathBuf>,
    pub output_flat: bool,
    pub only: Option<PathBuf>,
    /// Schema tag passed to the resolver
    pub tag: Option<String>,
    /// Template literal tag used to find GraphQL in JS/TS sources
    pub tag_name: String,
    pub options: OptionSet,
}

impl GenerationRequest {
    /// Where the backend writes: the explicit output or `__generated__`
    pub fn effective_output(&self) -> &Path {
        self.output_path
            .as_deref()
            .unwrap_or_else(|| Path::new(GENERATED_DIR))
    }

    /// True when no output was given and files go next to their sources
    pub fn output_is_inferred(&self) -> bool {
        self.output_path.is_none()
    }
}
