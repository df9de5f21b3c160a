//! File Watchers
//!
//! Concrete implementations of the FileWatcher port.

mod native;

pub use native::{NotifySubscription, NotifyWatcher};
