//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::watch::{ExitStrategy, LifecycleMode, WatchController, WatchState};
use crate::application::{CheckUseCase, GenerateUseCase, GenerationDispatcher};
use crate::config::Config;
use crate::domain::entities::{GenerationRequest, DEFAULT_TAG_NAME};
use crate::domain::value_objects::SourcePatterns;
use crate::error::{GenError, GenResult};
use crate::infrastructure::{
    backend_for, FsProjectState, InterruptFlag, KeypressExit, LocalFs, LocalSchemaResolver,
    NotifyWatcher, RunUntilKilled,
};
use crate::presentation::cli::{SchemaArgs, SourceArgs};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase =
    GenerateUseCase<FsProjectState<LocalFs>, LocalSchemaResolver<LocalFs>, LocalFs>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<FsProjectState<LocalFs>, LocalSchemaResolver<LocalFs>>;

/// Type alias for the concrete watch controller
pub type ConcreteWatchController = WatchController<NotifyWatcher, Box<dyn ExitStrategy>>;

/// `--project` (or the current directory), canonicalized
pub fn resolve_project_root(project: Option<&Path>) -> GenResult<PathBuf> {
    let root = match project {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    root.canonicalize().map_err(|e| GenError::Config {
        file: root.clone(),
        message: format!("project root is not accessible: {}", e),
    })
}

/// Include/exclude globs: command line, then config, then defaults
pub fn source_patterns(root: &Path, config: &Config, args: &SourceArgs) -> SourcePatterns {
    let pick = |cli: &[String], configured: &[String]| {
        if cli.is_empty() {
            configured.to_vec()
        } else {
            cli.to_vec()
        }
    };
    SourcePatterns::new(root)
        .with_includes(pick(&args.includes, &config.client.includes))
        .with_excludes(pick(&args.excludes, &config.client.excludes))
}

/// Template tag from config, else the default
pub fn configured_tag_name(config: &Config) -> &str {
    config.client.tag_name.as_deref().unwrap_or(DEFAULT_TAG_NAME)
}

pub fn create_schema_resolver(
    root: &Path,
    config: &Config,
    args: &SchemaArgs,
) -> LocalSchemaResolver<LocalFs> {
    let files = if args.local_schema_files.is_empty() {
        config.schema.local_file.clone()
    } else {
        args.local_schema_files.clone()
    };
    LocalSchemaResolver::new(LocalFs::new(), root, files).with_tags(config.schema.tags.clone())
}

/// Create a generate use case with all dependencies wired up
///
/// Only the backend for the request's target is constructed.
pub fn create_generate_use_case(
    root: &Path,
    config: &Config,
    request: GenerationRequest,
    sources: &SourcePatterns,
    schema: &SchemaArgs,
    backend_command: Option<&str>,
) -> GenResult<ConcreteGenerateUseCase> {
    let project = FsProjectState::new(LocalFs::new(), sources, request.tag_name.clone())?;
    let resolver = create_schema_resolver(root, config, schema);

    let command = backend_command.or(config.generate.backend_command.as_deref());
    let backend = backend_for(request.target, command, LocalFs::new())?;
    let dispatcher = GenerationDispatcher::new(LocalFs::new(), root).with_backend(request.target, backend);

    Ok(GenerateUseCase::new(project, resolver, dispatcher, request))
}

/// Create a check use case with all dependencies wired up
pub fn create_check_use_case(
    root: &Path,
    config: &Config,
    sources: &SourcePatterns,
    schema: &SchemaArgs,
) -> GenResult<ConcreteCheckUseCase> {
    let project = FsProjectState::new(LocalFs::new(), sources, configured_tag_name(config))?;
    Ok(CheckUseCase::new(project, create_schema_resolver(root, config, schema)))
}

/// Watch settings for a validated request
pub fn create_watch_state(
    sources: SourcePatterns,
    request: &GenerationRequest,
    config: &Config,
    is_tty: bool,
) -> WatchState {
    WatchState::new(sources, request.output_path.as_deref(), is_tty)
        .with_generated_marker(config.watch.generated_dir_marker.clone())
        .with_debounce(Duration::from_millis(config.watch.debounce_ms))
}

/// Pick the exit strategy once: raw-mode keypress on a terminal, otherwise
/// run until interrupted
pub fn create_exit_strategy(mode: LifecycleMode) -> GenResult<Box<dyn ExitStrategy>> {
    let interrupted = InterruptFlag::install()?;
    Ok(match mode {
        LifecycleMode::Interactive => Box::new(KeypressExit::new(interrupted)?),
        LifecycleMode::Headless => Box::new(RunUntilKilled::new(interrupted)),
    })
}

/// Create the watch controller over the `notify` watcher
pub fn create_watch_controller(state: WatchState) -> GenResult<ConcreteWatchController> {
    let exit = create_exit_strategy(LifecycleMode::detect(state.is_tty))?;
    Ok(WatchController::new(state, NotifyWatcher::new(), exit))
}
