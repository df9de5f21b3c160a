//! Watch event types, watch state, and debouncing

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

use crate::domain::entities::GENERATED_DIR;
use crate::domain::ports::TriggerKind;
use crate::domain::value_objects::SourcePatterns;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Configuration of one watch session. Read-only once watching starts.
#[derive(Debug, Clone)]
pub struct WatchState {
    /// Files to watch
    pub sources: SourcePatterns,
    /// Path substrings that suppress a trigger (self-caused writes)
    pub exclude_markers: Vec<String>,
    /// Whether stdin is an interactive terminal
    pub is_tty: bool,
    /// Quiet period before queued triggers regenerate
    pub debounce: Duration,
}

impl WatchState {
    /// Watch `sources`, excluding `__generated__` and the explicit output
    /// path if there is one
    pub fn new(sources: SourcePatterns, output: Option<&Path>, is_tty: bool) -> Self {
        let mut exclude_markers = vec![GENERATED_DIR.to_string()];
        if let Some(output) = output {
            let marker = output
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect::<PathBuf>()
                .display()
                .to_string();
            if !marker.is_empty() {
                exclude_markers.push(marker);
            }
        }
        Self {
            sources,
            exclude_markers,
            is_tty,
            debounce: Duration::from_millis(DEBOUNCE_MS),
        }
    }

    /// Replace the generated-output directory marker
    pub fn with_generated_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if let Some(first) = self.exclude_markers.first_mut() {
            *first = marker;
        }
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The first exclude marker contained in `path`, if any.
    ///
    /// Plain substring match on the displayed path. Paths that merely
    /// contain the output name somewhere are suppressed too.
    pub fn suppressing_marker(&self, path: &Path) -> Option<&str> {
        let path = path.to_string_lossy();
        self.exclude_markers
            .iter()
            .filter(|marker| !marker.is_empty())
            .find(|marker| path.contains(marker.as_str()))
            .map(String::as_str)
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Subscription opened
    WatchStarted {
        root: String,
        watching: Vec<String>,
        interactive: bool,
    },
    /// A source file changed
    FileChanged { path: String, kind: TriggerKind },
    /// A change was ignored because it matched an exclude marker
    TriggerSuppressed { path: String, marker: String },
    /// Generation started
    GenerationStarted,
    /// Generation completed
    GenerationComplete { files_written: usize },
    /// Generation failed; watching continues
    Error { message: String },
    /// Watch stopped
    Shutdown { reason: String },
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Triggers waiting for the debounce window to pass
#[derive(Debug, Default)]
pub struct WatcherState {
    pending_changes: BTreeSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if the quiet period has passed and we have pending changes
    pub fn should_sync(&self, debounce: Duration) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= debounce,
            None => false,
        }
    }

    /// Take all pending changes, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        self.last_change = None;
        std::mem::take(&mut self.pending_changes).into_iter().collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
