use std::path::{Path, PathBuf};

use anyhow::Result;

use gqlgen::config::Config;
use gqlgen::presentation::cli::ColorWhen;
use gqlgen::presentation::factory::resolve_project_root;

use crate::ui::context::UiContext;

/// Project root, loaded config and UI settings shared by every command
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
}

impl ProjectContext {
    /// Resolve the project root, load `gqlgen.toml` and report unknown keys
    pub fn load(
        project: Option<&Path>,
        json: bool,
        verbose: u8,
        color: Option<ColorWhen>,
    ) -> Result<Self> {
        let root = resolve_project_root(project)?;
        let (config, warnings) = Config::load_or_default(&root)?;
        let ui = UiContext::new(json, verbose, color, &config);

        for warning in &warnings {
            if json {
                let _ = crate::ui::json::emit(serde_json::json!({
                    "event": "config_warning",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                }));
            } else {
                eprint!(
                    "{}",
                    crate::ui::views::config::render_config_warning(warning, ui.color, ui.unicode)
                );
            }
        }

        Ok(Self { root, config, ui })
    }
}
