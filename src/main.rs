//! gqlgen CLI - generate typed client code from GraphQL operations
//!
//! Usage: gqlgen <COMMAND>
//!
//! Commands:
//!   generate  Generate code once, or keep regenerating with --watch
//!   check     Validate operations against the schema without writing

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gqlgen::presentation::{Cli, Commands};

use crate::commands::check::CheckArgs;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let Cli {
        json,
        color,
        verbose,
        project,
        command,
    } = cli;

    match command {
        Commands::Generate(generate) => {
            commands::generate::cmd_generate(project.as_deref(), json, verbose, color, &generate)
        }
        Commands::Check {
            tag,
            schema,
            sources,
        } => {
            commands::check::cmd_check(
                project.as_deref(),
                json,
                verbose,
                color,
                CheckArgs {
                    tag: tag.as_deref(),
                    schema: &schema,
                    sources: &sources,
                },
            )?;
            Ok(0)
        }
    }
}
