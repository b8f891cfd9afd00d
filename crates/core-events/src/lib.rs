//! Editor notifications and per-editor observer registration.
//!
//! Each editor owns one [`ObserverList`]; there is no global bus. Events are
//! delivered synchronously, in registration order, at the end of the
//! operation that produced them.

use core_state::HistoryReplay;
use core_text::Position;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The whole buffer was replaced by a load.
    ContentLoaded,
    /// An edit changed the buffer; `cursor` is where it left the cursor.
    TextChanged { cursor: Position },
    /// Undo or redo applied a history step.
    HistoryReplayed(HistoryReplay),
}

impl EditorEvent {
    fn kind(&self) -> &'static str {
        match self {
            EditorEvent::ContentLoaded => "content_loaded",
            EditorEvent::TextChanged { .. } => "text_changed",
            EditorEvent::HistoryReplayed(_) => "history_replayed",
        }
    }
}

/// Receiver of editor notifications.
///
/// Every method has a no-op default; implement only what you need. The
/// default `on_event` fans out to the per-kind methods.
pub trait EditorObserver {
    fn on_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::ContentLoaded => self.content_loaded(),
            EditorEvent::TextChanged { cursor } => self.text_changed(*cursor),
            EditorEvent::HistoryReplayed(replay) => self.history_replayed(replay),
        }
    }
    fn content_loaded(&mut self) {}
    fn text_changed(&mut self, _cursor: Position) {}
    fn history_replayed(&mut self, _replay: &HistoryReplay) {}
}

/// Default no-op observer.
pub struct NoopObserver;

impl EditorObserver for NoopObserver {}

/// Shared observer: the embedder keeps one handle, the editor another.
impl<T: EditorObserver> EditorObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &EditorEvent) {
        self.borrow_mut().on_event(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct ObserverList {
    observers: Vec<(ObserverId, Box<dyn EditorObserver>)>,
    next_id: u64,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn register<O: EditorObserver + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        tracing::debug!(target: "events", id = id.0, count = self.observers.len(), "observer_registered");
        id
    }

    /// Returns false when `id` was not registered (or already removed).
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: &EditorEvent) {
        tracing::trace!(target: "events", kind = event.kind(), observers = self.observers.len(), "notify");
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<&'static str>,
    }

    impl EditorObserver for Recorder {
        fn content_loaded(&mut self) {
            self.seen.push("loaded");
        }
        fn text_changed(&mut self, _cursor: Position) {
            self.seen.push("changed");
        }
    }

    #[test]
    fn notify_reaches_every_observer_in_order() {
        let first = Rc::new(RefCell::new(Recorder::default()));
        let second = Rc::new(RefCell::new(Recorder::default()));
        let mut list = ObserverList::new();
        list.register(first.clone());
        list.register(second.clone());
        list.register(NoopObserver);
        list.notify(&EditorEvent::ContentLoaded);
        list.notify(&EditorEvent::TextChanged {
            cursor: Position::new(0, 1),
        });
        assert_eq!(first.borrow().seen, vec!["loaded", "changed"]);
        assert_eq!(second.borrow().seen, vec!["loaded", "changed"]);
    }

    #[test]
    fn unregister_stops_delivery() {
        let rec = Rc::new(RefCell::new(Recorder::default()));
        let mut list = ObserverList::new();
        let id = list.register(rec.clone());
        assert!(list.unregister(id));
        assert!(!list.unregister(id));
        list.notify(&EditorEvent::ContentLoaded);
        assert!(rec.borrow().seen.is_empty());
        assert!(list.is_empty());
    }
}
