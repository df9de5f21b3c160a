//! Watch Use Case
//!
//! Continuous regeneration while sources change:
//! - File system monitoring through the `FileWatcher` port
//! - Self-trigger suppression via exclude markers (`__generated__`, output path)
//! - Debouncing (100ms default) and coalescing of queued triggers
//! - Interactive (keypress) or headless (run until killed) lifecycle
//!
//! ## Usage
//!
//! ```ignore
//! let state = WatchState::new(sources, request.output_path.as_deref(), is_tty);
//! let mut controller = WatchController::new(state, NotifyWatcher::new(), exit);
//! let outcome = controller.run(&mut use_case, |event| { ... })?;
//! ```

mod controller;
mod event;
mod lifecycle;


pub use controller::{Regenerate, WatchController, WatchPhase, POLL_INTERVAL};
pub use event::{WatchEvent, WatchState, WatcherState, DEBOUNCE_MS};
pub use lifecycle::{ExitRequest, ExitStrategy, LifecycleMode, WatchOutcome};
