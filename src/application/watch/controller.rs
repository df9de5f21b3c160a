//! Watch controller
//!
//! Owns the file-system subscription and drives the
//! `Idle` / `Generating` / `AwaitingExit` / `Closed` lifecycle.

use std::path::Path;
use std::time::Duration;

use crate::domain::ports::{FileWatcher, RegenerationTrigger, Subscription, TriggerKind};
use crate::error::GenResult;

use super::event::{WatchEvent, WatchState, WatcherState};
use super::lifecycle::{ExitRequest, ExitStrategy, LifecycleMode, WatchOutcome};

/// How long one loop iteration waits for a file event
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The repeatable generation action driven by the watch loop
pub trait Regenerate {
    /// Invalidate cached state for a changed file
    fn file_did_change(&mut self, path: &Path);

    /// Run one generation pass, returning files written
    fn regenerate(&mut self) -> GenResult<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchPhase {
    Idle,
    Generating,
    AwaitingExit,
    Closed,
}

/// Single owner of a watch session.
///
/// Regeneration runs on the controller's own loop, so at most one is in
/// flight. Triggers that arrive meanwhile stay queued in the subscription
/// and collapse into one follow-up pass. The subscription is closed exactly
/// once: on shutdown, or on drop if the loop exits with an error.
pub struct WatchController<W: FileWatcher, E: ExitStrategy> {
    state: WatchState,
    watcher: W,
    exit: E,
    subscription: Option<W::Subscription>,
    phase: WatchPhase,
    pending: WatcherState,
}

impl<W: FileWatcher, E: ExitStrategy> WatchController<W, E> {
    pub fn new(state: WatchState, watcher: W, exit: E) -> Self {
        Self {
            state,
            watcher,
            exit,
            subscription: None,
            phase: WatchPhase::Idle,
            pending: WatcherState::new(),
        }
    }

    pub fn phase(&self) -> WatchPhase {
        self.phase
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Run the initial generation, open the subscription, and loop until an
    /// exit is requested.
    ///
    /// Generation failures are reported through `on_event` and never stop
    /// the loop. Errors from opening the subscription or polling the exit
    /// strategy are returned.
    pub fn run<A, F>(&mut self, action: &mut A, on_event: F) -> GenResult<WatchOutcome>
    where
        A: Regenerate + ?Sized,
        F: Fn(WatchEvent),
    {
        // The first pass may fail (e.g. schema not reachable yet); watching
        // starts regardless.
        self.generate(action, &on_event);

        self.subscription = Some(self.watcher.subscribe(&self.state.sources)?);
        self.phase = WatchPhase::Idle;

        on_event(WatchEvent::WatchStarted {
            root: self.state.sources.root.display().to_string(),
            watching: self.state.sources.includes.clone(),
            interactive: self.exit.mode() == LifecycleMode::Interactive,
        });

        loop {
            if let Some(request) = self.exit.exit_requested()? {
                return Ok(self.shutdown(request, &on_event));
            }

            let trigger = match self.subscription.as_mut() {
                Some(subscription) => subscription.next_trigger(POLL_INTERVAL),
                None => None,
            };
            if let Some(trigger) = trigger {
                self.accept(trigger, action, &on_event);
            }

            if self.pending.should_sync(self.state.debounce) {
                // A keypress that raced a queued trigger wins.
                if let Some(request) = self.exit.exit_requested()? {
                    return Ok(self.shutdown(request, &on_event));
                }
                self.pending.take_changes();
                self.generate(action, &on_event);
            }
        }
    }

    fn accept<A, F>(&mut self, trigger: RegenerationTrigger, action: &mut A, on_event: &F)
    where
        A: Regenerate + ?Sized,
        F: Fn(WatchEvent),
    {
        if trigger.kind == TriggerKind::Other {
            return;
        }

        if let Some(marker) = self.state.suppressing_marker(&trigger.path) {
            on_event(WatchEvent::TriggerSuppressed {
                path: trigger.path.display().to_string(),
                marker: marker.to_string(),
            });
            return;
        }

        action.file_did_change(&trigger.path);
        on_event(WatchEvent::FileChanged {
            path: trigger.path.display().to_string(),
            kind: trigger.kind,
        });
        self.pending.add_change(trigger.path);
    }

    fn generate<A, F>(&mut self, action: &mut A, on_event: &F)
    where
        A: Regenerate + ?Sized,
        F: Fn(WatchEvent),
    {
        self.phase = WatchPhase::Generating;
        on_event(WatchEvent::GenerationStarted);

        match action.regenerate() {
            Ok(files_written) => on_event(WatchEvent::GenerationComplete { files_written }),
            Err(e) => on_event(WatchEvent::Error {
                message: e.to_string(),
            }),
        }

        self.phase = WatchPhase::Idle;
    }

    fn shutdown<F: Fn(WatchEvent)>(&mut self, request: ExitRequest, on_event: &F) -> WatchOutcome {
        let (outcome, reason) = match request {
            ExitRequest::Keypress => {
                self.phase = WatchPhase::AwaitingExit;
                (WatchOutcome::Exited, "keypress")
            }
            ExitRequest::Interrupt => (WatchOutcome::Interrupted, "interrupted"),
        };

        self.close_subscription();
        self.phase = WatchPhase::Closed;

        on_event(WatchEvent::Shutdown {
            reason: reason.to_string(),
        });
        outcome
    }

    fn close_subscription(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.close();
        }
    }
}

impl<W: FileWatcher, E: ExitStrategy> Drop for WatchController<W, E> {
    fn drop(&mut self) {
        self.close_subscription();
    }
}
