//! `notify`-based file watcher

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{FileWatcher, RegenerationTrigger, Subscription, TriggerKind};
use crate::domain::value_objects::SourcePatterns;
use crate::error::GenResult;
use crate::infrastructure::project::SourceMatcher;

/// Watches the base directories of the include globs recursively and
/// reports changes to source files
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyWatcher;

impl NotifyWatcher {
    pub fn new() -> Self {
        Self
    }
}

impl FileWatcher for NotifyWatcher {
    type Subscription = NotifySubscription;

    fn subscribe(&self, sources: &SourcePatterns) -> GenResult<NotifySubscription> {
        let matcher = SourceMatcher::new(sources)?;
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let kind = trigger_kind(&event.kind);
                    for path in event.paths {
                        let _ = tx.send(RegenerationTrigger::new(kind, path));
                    }
                }
            },
            Config::default(),
        )?;
        let roots = matcher.watch_roots();
        for root in &roots {
            watcher.watch(root, RecursiveMode::Recursive)?;
        }

        Ok(NotifySubscription {
            watcher,
            rx,
            matcher,
            roots,
        })
    }
}

pub struct NotifySubscription {
    watcher: RecommendedWatcher,
    rx: Receiver<RegenerationTrigger>,
    matcher: SourceMatcher,
    roots: Vec<PathBuf>,
}

impl Subscription for NotifySubscription {
    fn next_trigger(&mut self, timeout: Duration) -> Option<RegenerationTrigger> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(trigger) if self.matcher.is_source(&trigger.path) => return Some(trigger),
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn close(mut self) {
        for root in &self.roots {
            let _ = self.watcher.unwatch(root);
        }
    }
}

fn trigger_kind(kind: &EventKind) -> TriggerKind {
    match kind {
        EventKind::Create(_) => TriggerKind::Created,
        EventKind::Modify(ModifyKind::Metadata(_)) => TriggerKind::Other,
        EventKind::Modify(_) => TriggerKind::Modified,
        EventKind::Remove(_) => TriggerKind::Removed,
        EventKind::Access(_) | EventKind::Any | EventKind::Other => TriggerKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, MetadataKind, RemoveKind};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn event_kinds_map_to_triggers() {
        assert_eq!(trigger_kind(&EventKind::Create(CreateKind::File)), TriggerKind::Created);
        assert_eq!(
            trigger_kind(&EventKind::Modify(ModifyKind::Data(DataChange::Content))),
            TriggerKind::Modified
        );
        assert_eq!(
            trigger_kind(&EventKind::Modify(ModifyKind::Metadata(MetadataKind::Any))),
            TriggerKind::Other
        );
        assert_eq!(trigger_kind(&EventKind::Remove(RemoveKind::File)), TriggerKind::Removed);
        assert_eq!(trigger_kind(&EventKind::Access(AccessKind::Any)), TriggerKind::Other);
    }

    #[test]
    fn reports_source_changes_only() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("src")).unwrap();

        let mut subscription = NotifyWatcher::new()
            .subscribe(&SourcePatterns::new(&root))
            .unwrap();
        assert_eq!(subscription.roots, vec![root.join("src")]);

        fs::write(root.join("src/notes.md"), "ignored").unwrap();
        fs::write(root.join("src/Me.graphql"), "query Me { me }").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = None;
        while Instant::now() < deadline {
            if let Some(trigger) = subscription.next_trigger(Duration::from_millis(50)) {
                seen = Some(trigger);
                break;
            }
        }

        let trigger = seen.expect("change to src/Me.graphql reported");
        assert_eq!(trigger.path, root.join("src/Me.graphql"));
        subscription.close();
    }
}
