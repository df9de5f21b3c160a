use std::path::Path;

use anyhow::Result;

use gqlgen::application::watch::{WatchEvent, WatchOutcome};
use gqlgen::application::{validate_request, GenerateEvent};
use gqlgen::domain::entities::GenerationRequest;
use gqlgen::presentation::cli::{ColorWhen, GenerateCommand};
use gqlgen::presentation::factory::{self, ConcreteGenerateUseCase};

use super::project::ProjectContext;
use crate::ui::context::UiContext;

/// Run `gqlgen generate`; returns the process exit code
pub fn cmd_generate(
    project: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
    command: &GenerateCommand,
) -> Result<i32> {
    // Flag combinations fail before the project is touched.
    let mut request = validate_request(&command.to_args())?;

    let ctx = ProjectContext::load(project, json, verbose, color)?;
    if command.tag_name.is_none() {
        request.tag_name = factory::configured_tag_name(&ctx.config).to_string();
    }

    let sources = factory::source_patterns(&ctx.root, &ctx.config, &command.sources);
    let mut use_case = factory::create_generate_use_case(
        &ctx.root,
        &ctx.config,
        request.clone(),
        &sources,
        &command.schema,
        command.backend_command.as_deref(),
    )?;

    if command.watch {
        let is_tty = crate::ui::terminal::stdin_is_tty();
        let state = factory::create_watch_state(sources, &request, &ctx.config, is_tty);
        let outcome = run_watch(&ctx, &request, state, &mut use_case)?;
        return Ok(outcome.exit_code());
    }

    run_once(&ctx, &request, &mut use_case)?;
    Ok(0)
}

fn run_once(
    ctx: &ProjectContext,
    request: &GenerationRequest,
    use_case: &mut ConcreteGenerateUseCase,
) -> Result<()> {
    let ui = ctx.ui;
    if ui.json {
        crate::ui::json::emit_line(&GenerateEvent::started(request).to_json())?;
    } else {
        print!(
            "{}",
            crate::ui::views::generate::render_generate_header(
                &ctx.root.display().to_string(),
                request.target.as_str(),
                &request.effective_output().display().to_string(),
                ui.color,
                ui.unicode,
            )
        );
    }

    let report = use_case.run_once()?;

    if ui.json {
        crate::ui::json::emit_line(&GenerateEvent::complete(&report).to_json())?;
    } else {
        print!(
            "{}",
            crate::ui::views::generate::render_generate_summary(&report, ui.color, ui.unicode)
        );
    }
    Ok(())
}

fn run_watch(
    ctx: &ProjectContext,
    request: &GenerationRequest,
    state: gqlgen::application::watch::WatchState,
    use_case: &mut ConcreteGenerateUseCase,
) -> Result<WatchOutcome> {
    let ui = ctx.ui;
    let interactive = state.is_tty;

    // Header goes out before raw mode is switched on.
    if !ui.json {
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                &ctx.root.display().to_string(),
                request.target.as_str(),
                &request.effective_output().display().to_string(),
                interactive,
                ui.color,
                ui.unicode,
            )
        );
    }

    let mut controller = factory::create_watch_controller(state)?;
    let outcome = controller.run(use_case, |event| emit_watch_event(&ui, interactive, &event))?;
    Ok(outcome)
}

fn emit_watch_event(ui: &UiContext, raw_mode: bool, event: &WatchEvent) {
    let text = if ui.json {
        format!("{}\n", event.to_json())
    } else {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        match crate::ui::views::watch::render_watch_event(
            &timestamp,
            event,
            ui.verbose,
            ui.color,
            ui.unicode,
        ) {
            Some(rendered) => rendered,
            None => return,
        }
    };

    let text = if raw_mode {
        crate::ui::views::watch::raw_mode_lines(&text)
    } else {
        text
    };

    match event {
        WatchEvent::Error { .. } if !ui.json => eprint!("{text}"),
        _ => {
            print!("{text}");
            let _ = std::io::Write::flush(&mut std::io::stdout());
        }
    }
}
