//! Observer registry for filesystem change notification.
//!
//! Mutating operations report each successful change here; interested parts
//! of the app register a callback and unregister when they stop caring. The
//! registry is owned by the app, so observers never outlive it.

use std::path::PathBuf;

/// The kind of change reported to observers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChangeKind {
    Created,
    Changed,
    Deleted,
}

/// A single filesystem change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// Root-relative path of the affected entry.
    pub path: PathBuf,
}

/// Handle returned by [`ChangeNotifier::register`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ObserverId(u64);

type ObserverCallback = Box<dyn Fn(&ChangeEvent) + Send>;

/// Explicit observer registry: register, unregister, fire-on-change.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    observers: Vec<(ObserverId, ObserverCallback)>,
}

impl ChangeNotifier {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked on every subsequent change event.
    pub fn register(&mut self, callback: impl Fn(&ChangeEvent) + Send + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));

        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns false when `id` is unknown (already removed or never issued
    /// by this registry).
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let count_before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);

        self.observers.len() != count_before
    }

    /// Delivers `event` to every registered observer in registration order.
    pub fn notify(&self, event: &ChangeEvent) {
        for (_, callback) in &self.observers {
            callback(event);
        }
    }
}
