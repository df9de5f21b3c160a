use std::path::Path;

use anyhow::Result;

use gqlgen::presentation::cli::{ColorWhen, SchemaArgs, SourceArgs};
use gqlgen::presentation::factory;

use super::project::ProjectContext;

pub struct CheckArgs<'a> {
    pub tag: Option<&'a str>,
    pub schema: &'a SchemaArgs,
    pub sources: &'a SourceArgs,
}

pub fn cmd_check(
    project: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
    args: CheckArgs<'_>,
) -> Result<()> {
    let ctx = ProjectContext::load(project, json, verbose, color)?;
    let sources = factory::source_patterns(&ctx.root, &ctx.config, args.sources);
    let mut use_case = factory::create_check_use_case(&ctx.root, &ctx.config, &sources, args.schema)?;

    let report = use_case.execute(args.tag)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "check_complete",
            "command": "check",
            "operations": report.operations,
            "fragments": report.fragments,
            "schema_types": report.schema_types,
        }))?;
    } else {
        print!(
            "{}",
            crate::ui::views::check::render_check_report(&report, ctx.ui.color, ctx.ui.unicode)
        );
    }

    Ok(())
}
