//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! Rendering lives in the binary (`src/ui`).
//!
//! ## Usage
//!
//! ```ignore
//! use gqlgen::presentation::factory;
//!
//! let mut use_case = factory::create_generate_use_case(&root, &config, request, &sources, &schema, None)?;
//! let report = use_case.run_once()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::create_generate_use_case;
