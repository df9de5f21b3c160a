//! Watch exit strategies
//!
//! - `KeypressExit`: raw-mode terminal, any key press ends the session
//! - `RunUntilKilled`: no terminal, only an interrupt ends the session

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use crate::application::watch::{ExitRequest, ExitStrategy, LifecycleMode};
use crate::error::{GenError, GenResult};

/// Set once the process receives SIGINT
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Install the process-wide Ctrl+C handler. Only one may exist.
    pub fn install() -> GenResult<Self> {
        let flag = Self::default();
        let handle = flag.0.clone();
        ctrlc::set_handler(move || {
            handle.store(true, Ordering::SeqCst);
        })
        .map_err(|e| GenError::Watch {
            message: format!("failed to install interrupt handler: {}", e),
        })?;
        Ok(flag)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Headless lifecycle: watch until interrupted
#[derive(Debug, Clone)]
pub struct RunUntilKilled {
    interrupted: InterruptFlag,
}

impl RunUntilKilled {
    pub fn new(interrupted: InterruptFlag) -> Self {
        Self { interrupted }
    }
}

impl ExitStrategy for RunUntilKilled {
    fn mode(&self) -> LifecycleMode {
        LifecycleMode::Headless
    }

    fn exit_requested(&mut self) -> GenResult<Option<ExitRequest>> {
        Ok(self.interrupted.is_set().then_some(ExitRequest::Interrupt))
    }
}

/// Interactive lifecycle: raw mode is on for as long as this value lives
#[derive(Debug)]
pub struct KeypressExit {
    interrupted: InterruptFlag,
}

impl KeypressExit {
    /// Switch the terminal to raw mode so single key presses are readable
    pub fn new(interrupted: InterruptFlag) -> GenResult<Self> {
        terminal::enable_raw_mode().map_err(|e| GenError::Watch {
            message: format!("failed to enable raw terminal mode: {}", e),
        })?;
        Ok(Self { interrupted })
    }
}

impl ExitStrategy for KeypressExit {
    fn mode(&self) -> LifecycleMode {
        LifecycleMode::Interactive
    }

    fn exit_requested(&mut self) -> GenResult<Option<ExitRequest>> {
        if self.interrupted.is_set() {
            return Ok(Some(ExitRequest::Interrupt));
        }
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(ExitRequest::Keypress));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for KeypressExit {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_exits_only_after_interrupt() {
        let flag = InterruptFlag::default();
        let mut strategy = RunUntilKilled::new(flag.clone());

        assert_eq!(strategy.mode(), LifecycleMode::Headless);
        assert_eq!(strategy.exit_requested().unwrap(), None);

        flag.set();
        assert_eq!(strategy.exit_requested().unwrap(), Some(ExitRequest::Interrupt));
    }
}
