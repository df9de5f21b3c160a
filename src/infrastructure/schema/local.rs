//! Local SDL schema resolver

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use graphql_parser::schema::{self, Definition, TypeDefinition};

use crate::domain::entities::Schema;
use crate::domain::ports::{FileSystem, SchemaResolver};
use crate::error::{GenError, GenResult};

/// Tag that always means the configured default schema
pub const CURRENT_TAG: &str = "current";

/// Resolves the schema from SDL files on disk.
///
/// Relative paths resolve against the project root. Several files are
/// concatenated in order before parsing.
pub struct LocalSchemaResolver<F: FileSystem> {
    fs: F,
    root: PathBuf,
    files: Vec<PathBuf>,
    tags: BTreeMap<String, PathBuf>,
}

impl<F: FileSystem> LocalSchemaResolver<F> {
    pub fn new(fs: F, root: impl Into<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            files,
            tags: BTreeMap::new(),
        }
    }

    /// Schema files selectable with `--tag`
    pub fn with_tags(mut self, tags: BTreeMap<String, PathBuf>) -> Self {
        self.tags = tags;
        self
    }

    fn files_for(&self, tag: Option<&str>) -> GenResult<Vec<PathBuf>> {
        let files = match tag {
            None | Some(CURRENT_TAG) => self.files.clone(),
            Some(tag) => {
                let file = self.tags.get(tag).ok_or_else(|| {
                    GenError::schema_load(format!(
                        "unknown schema tag '{}'; map it under [schema.tags] in gqlgen.toml",
                        tag
                    ))
                })?;
                vec![file.clone()]
            }
        };

        if files.is_empty() {
            return Err(GenError::schema_load(
                "no schema file configured; pass --local-schema-file or set [schema] local_file",
            ));
        }
        if let Some(file) = files.iter().find(|f| !is_sdl_file(f)) {
            return Err(GenError::schema_load(format!(
                "{}: only SDL schema files (.graphql, .graphqls, .gql, .sdl) are supported",
                file.display()
            )));
        }
        Ok(files.into_iter().map(|f| self.root.join(f)).collect())
    }
}

impl<F: FileSystem> SchemaResolver for LocalSchemaResolver<F> {
    fn resolve(&self, tag: Option<&str>) -> GenResult<Schema> {
        let mut sdl = String::new();
        for file in self.files_for(tag)? {
            let content = self
                .fs
                .read(&file)
                .map_err(|e| GenError::schema_load(e.to_string()))?;
            if !sdl.is_empty() {
                sdl.push('\n');
            }
            sdl.push_str(&content);
        }
        parse_sdl(&sdl)
    }
}

/// Parse SDL into a `Schema`.
///
/// Root types come from a `schema { ... }` definition when there is one,
/// otherwise from types named `Query`, `Mutation` and `Subscription`.
pub fn parse_sdl(sdl: &str) -> GenResult<Schema> {
    let document = schema::parse_schema::<String>(sdl)
        .map_err(|e| GenError::schema_load(e.to_string().trim().to_string()))?;

    let mut type_names = BTreeSet::new();
    let mut roots = None;
    for definition in &document.definitions {
        match definition {
            Definition::SchemaDefinition(def) => {
                roots = Some((def.query.clone(), def.mutation.clone(), def.subscription.clone()));
            }
            Definition::TypeDefinition(def) => {
                type_names.insert(type_name(def).to_string());
            }
            _ => {}
        }
    }

    let (query_type, mutation_type, subscription_type) = roots.unwrap_or_else(|| {
        let named = |name: &str| type_names.contains(name).then(|| name.to_string());
        (named("Query"), named("Mutation"), named("Subscription"))
    });

    Ok(Schema {
        sdl: sdl.to_string(),
        query_type,
        mutation_type,
        subscription_type,
        type_names,
    })
}

fn type_name<'a>(def: &'a TypeDefinition<'_, String>) -> &'a str {
    match def {
        TypeDefinition::Scalar(t) => &t.name,
        TypeDefinition::Object(t) => &t.name,
        TypeDefinition::Interface(t) => &t.name,
        TypeDefinition::Union(t) => &t.name,
        TypeDefinition::Enum(t) => &t.name,
        TypeDefinition::InputObject(t) => &t.name,
    }
}

fn is_sdl_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("graphql" | "graphqls" | "gql" | "sdl")
    )
}
