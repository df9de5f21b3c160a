//! Request validation
//!
//! Turns raw generate flags into a `GenerationRequest`. Pure and
//! deterministic: no file system access, no schema resolution.

use std::path::{Path, PathBuf};

use crate::domain::entities::{GenerationRequest, OptionSet, DEFAULT_TAG_NAME};
use crate::domain::value_objects::Target;
use crate::error::ConfigurationError;

/// Raw generate flags as they come from the command line (after config
/// defaults are merged in)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    pub target: String,
    pub output: Option<PathBuf>,
    pub output_flat: bool,
    pub only: Option<PathBuf>,
    pub tag: Option<String>,
    pub tag_name: Option<String>,
    pub passthrough_custom_scalars: bool,
    pub custom_scalars_prefix: Option<String>,
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

impl GenerateArgs {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_output_flat(mut self, output_flat: bool) -> Self {
        self.output_flat = output_flat;
        self
    }
}

/// Validate flag combinations for the chosen target.
///
/// Rules are checked in order: known target, output present for targets
/// that need one, bare directory name for TypeScript/Flow unless
/// `output_flat` is set.
pub fn validate_request(args: &GenerateArgs) -> Result<GenerationRequest, ConfigurationError> {
    let target: Target = args.target.parse()?;

    let output = args
        .output
        .clone()
        .filter(|path| !path.as_os_str().is_empty());

    match &output {
        None if !target.allows_inferred_output() => {
            return Err(ConfigurationError::OutputRequired {
                target: target.to_string(),
            });
        }
        Some(path)
            if target.allows_inferred_output()
                && !args.output_flat
                && !is_single_segment(path) =>
        {
            return Err(ConfigurationError::OutputNotDirectoryName {
                output: path.clone(),
            });
        }
        _ => {}
    }

    Ok(GenerationRequest {
        target,
        output_path: output,
        output_flat: args.output_flat,
        only: args.only.clone(),
        tag: args.tag.clone(),
        tag_name: args
            .tag_name
            .clone()
            .unwrap_or_else(|| DEFAULT_TAG_NAME.to_string()),
        options: OptionSet {
            passthrough_custom_scalars: args.passthrough_custom_scalars,
            custom_scalars_prefix: args.custom_scalars_prefix.clone(),
            add_typename: true,
            namespace: args.namespace.clone(),
            operation_ids_path: args.operation_ids_path.clone(),
            merge_in_fields_from_fragment_spreads: args.merge_in_fields_from_fragment_spreads,
            use_flow_exact_objects: args.use_flow_exact_objects,
            use_read_only_types: args.use_read_only_types,
            global_types_file: args.global_types_file.clone(),
            ts_file_extension: args.ts_file_extension.clone(),
            suppress_swift_multiline_string_literals: args
                .suppress_swift_multiline_string_literals,
            omit_deprecated_enum_cases: args.omit_deprecated_enum_cases,
        },
    })
}

fn is_single_segment(path: &Path) -> bool {
    !path.is_absolute() && path.components().count() == 1
}
