//! FileWatcher port - file-system change subscriptions

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::domain::value_objects::SourcePatterns;
use crate::error::GenResult;

/// What happened to a watched file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    Created,
    Modified,
    Removed,
    Other,
}

/// A changed file reported by a subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationTrigger {
    pub kind: TriggerKind,
    pub path: PathBuf,
}

impl RegenerationTrigger {
    pub fn new(kind: TriggerKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// A live subscription. Dropping it also stops delivery.
pub trait Subscription {
    /// Wait up to `timeout` for the next trigger
    fn next_trigger(&mut self, timeout: Duration) -> Option<RegenerationTrigger>;

    /// Stop delivery
    fn close(self);
}

/// Opens subscriptions over the files matched by a set of patterns
pub trait FileWatcher {
    type Subscription: Subscription;

    fn subscribe(&self, sources: &SourcePatterns) -> GenResult<Self::Subscription>;
}
