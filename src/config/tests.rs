//! Tests for the config module

use super::loader::{apply_env, parse_for_test};
use super::types::*;
use crate::error::GenError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(config.client.includes.is_empty());
    assert_eq!(config.client.tag_name, None);
    assert!(config.schema.local_file.is_empty());
    assert_eq!(config.watch.debounce_ms, 100);
    assert_eq!(config.watch.generated_dir_marker, "__generated__");
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[client]
includes = ["app/**/*.graphql"]
excludes = ["**/fixtures/**"]
tag_name = "graphql"

[schema]
local_file = "schema.graphql"

[schema.tags]
staging = "schema.staging.graphql"

[watch]
debounce_ms = 250

[generate]
backend_command = "node tools/emit.js"

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.client.includes, vec!["app/**/*.graphql"]);
    assert_eq!(config.client.tag_name.as_deref(), Some("graphql"));
    assert_eq!(config.schema.local_file, vec![PathBuf::from("schema.graphql")]);
    assert_eq!(
        config.schema.tags.get("staging"),
        Some(&PathBuf::from("schema.staging.graphql"))
    );
    assert_eq!(config.watch.debounce_ms, 250);
    assert_eq!(config.watch.generated_dir_marker, "__generated__");
    assert_eq!(config.generate.backend_command.as_deref(), Some("node tools/emit.js"));
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_schema_local_file_accepts_list() {
    let config: Config = toml::from_str(
        r#"
[schema]
local_file = ["schema.graphql", "client.graphql"]
"#,
    )
    .unwrap();

    assert_eq!(config.schema.local_file.len(), 2);
}

#[test]
fn test_unknown_keys_become_warnings_with_suggestion() {
    let (config, warnings) = parse_for_test(
        r#"
[client]
tagname = "graphql"

[watch]
debounce_ms = 50
"#,
    )
    .unwrap();

    assert_eq!(config.client.tag_name, None);
    assert_eq!(config.watch.debounce_ms, 50);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "tagname");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("tag_name"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse_for_test("[watch]\ndebounce_ms = \"soon\"\n").unwrap_err();
    assert!(matches!(err, GenError::Config { .. }));
}

#[test]
fn test_env_overrides() {
    let config = apply_env(
        Config::default(),
        env(&[
            ("GQLGEN_SCHEMA", "a.graphql, b.graphql"),
            ("GQLGEN_TAG_NAME", "graphql"),
            ("GQLGEN_BACKEND_COMMAND", "emit"),
            ("GQLGEN_DEBOUNCE_MS", "20"),
            ("NO_COLOR", "1"),
        ]),
    );

    assert_eq!(
        config.schema.local_file,
        vec![PathBuf::from("a.graphql"), PathBuf::from("b.graphql")]
    );
    assert_eq!(config.client.tag_name.as_deref(), Some("graphql"));
    assert_eq!(config.generate.backend_command.as_deref(), Some("emit"));
    assert_eq!(config.watch.debounce_ms, 20);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_invalid_env_values_are_ignored() {
    let config = apply_env(
        Config::default(),
        env(&[("GQLGEN_DEBOUNCE_MS", "fast"), ("NO_COLOR", ""), ("GQLGEN_SCHEMA", " , ")]),
    );

    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_prefers_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("gqlgen.toml"),
        "[schema]\nlocal_file = \"project.graphql\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_or_default(dir.path()).unwrap();

    assert!(warnings.is_empty());
    // GQLGEN_SCHEMA in the test environment would win; only assert when unset.
    if std::env::var("GQLGEN_SCHEMA").is_err() {
        assert_eq!(config.schema.local_file, vec![PathBuf::from("project.graphql")]);
    }
}

#[test]
fn test_load_reports_broken_project_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("gqlgen.toml"), "[client\n").unwrap();

    let err = Config::load_or_default(dir.path()).unwrap_err();

    assert!(err.to_string().contains("gqlgen.toml"));
}
