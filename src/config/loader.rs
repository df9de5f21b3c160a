//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, GenResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "gqlgen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| GenError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> GenResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GenError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project `gqlgen.toml`, else the user config, else defaults. Environment
/// overrides apply on top of whichever was found.
pub fn load_or_default(project_root: &Path) -> GenResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(project_root.join(CONFIG_FILE_NAME)),
        user_config_path(),
    ];

    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config dir>/gqlgen/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gqlgen").join("config.toml"))
}

/// Apply environment variable overrides (GQLGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // GQLGEN_SCHEMA (comma-separated schema files)
    if let Some(schema) = var("GQLGEN_SCHEMA") {
        let files: Vec<PathBuf> = schema
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        if !files.is_empty() {
            config.schema.local_file = files;
        }
    }

    if let Some(tag_name) = var("GQLGEN_TAG_NAME").filter(|s| !s.trim().is_empty()) {
        config.client.tag_name = Some(tag_name.trim().to_string());
    }

    if let Some(command) = var("GQLGEN_BACKEND_COMMAND").filter(|s| !s.trim().is_empty()) {
        config.generate.backend_command = Some(command);
    }

    if let Some(ms) = var("GQLGEN_DEBOUNCE_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
        config.watch.debounce_ms = ms;
    }

    // https://no-color.org: any non-empty value
    if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.output.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "client",
        "includes",
        "excludes",
        "tag_name",
        "schema",
        "local_file",
        "tags",
        "watch",
        "debounce_ms",
        "generated_dir_marker",
        "generate",
        "backend_command",
        "output",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, edit_distance(unknown, candidate)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ac != *bc));
            diagonal = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
pub(crate) fn parse_for_test(content: &str) -> GenResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new(CONFIG_FILE_NAME))
}
