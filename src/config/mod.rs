//! Configuration module for gqlgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GQLGEN_*)
//! 3. Project config (gqlgen.toml in the project root)
//! 4. User config (<config dir>/gqlgen/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{user_config_path, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{ClientConfig, ColorMode, Config, GenerateConfig, OutputConfig, SchemaConfig, WatchConfig};
