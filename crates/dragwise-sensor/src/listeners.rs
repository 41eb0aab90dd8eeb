//! Event subscription and the per-session listener batch.
//!
//! Sensors never touch a platform event system directly; they depend on the
//! [`EventSource`] capability, which a platform integration implements over
//! whatever its native subscription mechanism is. [`ListenerBatch`] groups
//! the subscriptions of one gesture session so teardown can release all of
//! them exactly once.

use std::rc::Rc;

use dragwise_core::{ElementId, KeyEvent, PointerEvent};
use smallvec::SmallVec;

pub type ListenerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    KeyDown,
    TouchMove,
}

/// Where a listener is attached: a single element, or the document owning
/// the gesture's original target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerScope {
    Document,
    Element(ElementId),
}

/// An event as delivered to a subscribed handler.
#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    /// Touch movement; carried only so a suppressor can exist (see
    /// [`PointerSensor::new`](crate::PointerSensor::new)).
    Touch,
}

pub type EventHandler = Rc<dyn Fn(&InputEvent)>;

/// Capability-scoped event subscription. Implementations must deliver
/// element-scoped listeners only events targeting that element, and must
/// tolerate unsubscription of unknown ids.
pub trait EventSource {
    fn subscribe(&self, scope: ListenerScope, kind: EventKind, handler: EventHandler)
        -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
}

/// The listeners bound for one gesture session.
///
/// `unbind` releases every subscription exactly once; later calls are
/// no-ops. A batch never outlives its session, so listeners cannot
/// accumulate across repeated gestures.
pub struct ListenerBatch {
    source: Rc<dyn EventSource>,
    ids: SmallVec<[ListenerId; 4]>,
}

impl ListenerBatch {
    pub fn new(source: Rc<dyn EventSource>) -> Self {
        Self {
            source,
            ids: SmallVec::new(),
        }
    }

    pub fn subscribe(&mut self, scope: ListenerScope, kind: EventKind, handler: EventHandler) {
        let id = self.source.subscribe(scope, kind, handler);
        self.ids.push(id);
    }

    pub fn unbind(&mut self) {
        for id in self.ids.drain(..) {
            self.source.unsubscribe(id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CountingSource {
        next_id: RefCell<ListenerId>,
        unsubscribed: RefCell<Vec<ListenerId>>,
    }

    impl EventSource for CountingSource {
        fn subscribe(
            &self,
            _scope: ListenerScope,
            _kind: EventKind,
            _handler: EventHandler,
        ) -> ListenerId {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        }

        fn unsubscribe(&self, id: ListenerId) {
            self.unsubscribed.borrow_mut().push(id);
        }
    }

    #[test]
    fn unbind_releases_each_subscription_once() {
        let source = Rc::new(CountingSource::default());
        let mut batch = ListenerBatch::new(Rc::clone(&source) as Rc<dyn EventSource>);
        batch.subscribe(ListenerScope::Document, EventKind::PointerMove, Rc::new(|_| {}));
        batch.subscribe(ListenerScope::Document, EventKind::PointerUp, Rc::new(|_| {}));
        assert!(!batch.is_empty());

        batch.unbind();
        assert!(batch.is_empty());
        assert_eq!(*source.unsubscribed.borrow(), vec![1, 2]);

        // Second unbind must not release anything again.
        batch.unbind();
        assert_eq!(source.unsubscribed.borrow().len(), 2);
    }
}
