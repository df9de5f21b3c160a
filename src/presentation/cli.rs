//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --project) are inherited by all subcommands
//! - `--target` is a free string so unknown targets surface as configuration
//!   errors with the list of supported targets

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::GenerateArgs;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// gqlgen - generate typed client code from GraphQL operations
#[derive(Parser, Debug)]
#[command(name = "gqlgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows suppressed watch triggers)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate code for the project's operations and fragments
    Generate(GenerateCommand),

    /// Validate operations against the schema without generating
    Check {
        /// Schema tag to resolve
        #[arg(long)]
        tag: Option<String>,

        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        sources: SourceArgs,
    },
}

/// Where the schema comes from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaArgs {
    /// Local SDL schema file (repeatable; files are concatenated)
    #[arg(long = "local-schema-file", value_name = "FILE")]
    pub local_schema_files: Vec<PathBuf>,
}

/// Which files hold GraphQL documents
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Include glob relative to the project root (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub includes: Vec<String>,

    /// Exclude glob relative to the project root (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub excludes: Vec<String>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateCommand {
    /// Output file or directory (default for typescript/flow: __generated__ next to sources)
    pub output: Option<PathBuf>,

    /// Target language: json, swift, typescript, flow, scala
    #[arg(long)]
    pub target: String,

    /// Regenerate whenever sources change
    #[arg(long)]
    pub watch: bool,

    /// Write a single file instead of a directory tree
    #[arg(long)]
    pub output_flat: bool,

    /// Only generate for operations defined in this file
    #[arg(long, value_name = "FILE")]
    pub only: Option<PathBuf>,

    /// Schema tag to resolve
    #[arg(long)]
    pub tag: Option<String>,

    /// Template literal tag marking GraphQL in JS/TS sources (default: gql)
    #[arg(long)]
    pub tag_name: Option<String>,

    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Map custom scalars to the raw JSON value
    #[arg(long)]
    pub passthrough_custom_scalars: bool,

    /// Prefix for generated custom scalar types
    #[arg(long, value_name = "PREFIX")]
    pub custom_scalars_prefix: Option<String>,

    /// Namespace for generated types
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,

    /// Write operation ids and sources to this JSON file
    #[arg(long, value_name = "FILE")]
    pub operation_ids_path: Option<PathBuf>,

    #[arg(long)]
    pub merge_in_fields_from_fragment_spreads: bool,

    #[arg(long)]
    pub use_flow_exact_objects: bool,

    #[arg(long)]
    pub use_read_only_types: bool,

    /// File for types shared across operations
    #[arg(long, value_name = "FILE")]
    pub global_types_file: Option<PathBuf>,

    /// Extension for generated TypeScript files
    #[arg(long, value_name = "EXT")]
    pub ts_file_extension: Option<String>,

    #[arg(long)]
    pub suppress_swift_multiline_string_literals: bool,

    #[arg(long)]
    pub omit_deprecated_enum_cases: bool,

    /// External emitter for non-json targets (default: gqlgen-emit-<target>)
    #[arg(long, value_name = "CMD")]
    pub backend_command: Option<String>,
}

impl GenerateCommand {
    /// Flags handed to request validation
    pub fn to_args(&self) -> GenerateArgs {
        GenerateArgs {
            target: self.target.clone(),
            output: self.output.clone(),
            output_flat: self.output_flat,
            only: self.only.clone(),
            tag: self.tag.clone(),
            tag_name: self.tag_name.clone(),
            passthrough_custom_scalars: self.passthrough_custom_scalars,
            custom_scalars_prefix: self.custom_scalars_prefix.clone(),
            namespace: self.namespace.clone(),
            operation_ids_path: self.operation_ids_path.clone(),
            merge_in_fields_from_fragment_spreads: self.merge_in_fields_from_fragment_spreads,
            use_flow_exact_objects: self.use_flow_exact_objects,
            use_read_only_types: self.use_read_only_types,
            global_types_file: self.global_types_file.clone(),
            ts_file_extension: self.ts_file_extension.clone(),
            suppress_swift_multiline_string_literals: self.suppress_swift_multiline_string_literals,
            omit_deprecated_enum_cases: self.omit_deprecated_enum_cases,
        }
    }
}
