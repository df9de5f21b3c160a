//! Watch lifecycle strategies
//!
//! Chosen once when watching starts:
//! - interactive: any keypress on the terminal stops watching (exit 0)
//! - headless: watch until the process is killed

use crate::error::GenResult;

/// How a watch session may end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleMode {
    Interactive,
    Headless,
}

impl LifecycleMode {
    pub fn detect(is_tty: bool) -> Self {
        if is_tty {
            LifecycleMode::Interactive
        } else {
            LifecycleMode::Headless
        }
    }
}

/// Why the watch loop should stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequest {
    /// Key pressed on an interactive terminal
    Keypress,
    /// External interrupt (SIGINT)
    Interrupt,
}

/// How a finished watch session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Interactive exit; the process should exit with status 0
    Exited,
    /// Interrupted from outside; not a successful exit
    Interrupted,
}

impl WatchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            WatchOutcome::Exited => 0,
            WatchOutcome::Interrupted => 130,
        }
    }
}

/// Source of exit requests, polled by the watch loop between file events
pub trait ExitStrategy {
    fn mode(&self) -> LifecycleMode;

    /// Non-blocking check for an exit request
    fn exit_requested(&mut self) -> GenResult<Option<ExitRequest>>;
}

impl<E: ExitStrategy + ?Sized> ExitStrategy for Box<E> {
    fn mode(&self) -> LifecycleMode {
        (**self).mode()
    }

    fn exit_requested(&mut self) -> GenResult<Option<ExitRequest>> {
        (**self).exit_requested()
    }
}
