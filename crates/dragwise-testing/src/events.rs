//! A scripted [`EventSource`] that delivers synthetic input to whatever is
//! currently subscribed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dragwise_core::{ElementId, Key, KeyEvent, Point, PointerEvent};
use dragwise_sensor::{EventHandler, EventKind, EventSource, InputEvent, ListenerId, ListenerScope};

struct Listener {
    id: ListenerId,
    scope: ListenerScope,
    kind: EventKind,
    handler: EventHandler,
}

/// Fake event source for tests. Subscriptions are recorded so tests can
/// assert symmetric cleanup; emission dispatches synchronously, and
/// handlers are free to subscribe or unsubscribe while being invoked
/// (the sensor does exactly that inside its pointer-down handler).
#[derive(Default)]
pub struct TestEventSource {
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<ListenerId>,
}

impl TestEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pointer-down. The event's own target decides which
    /// element-scoped listeners see it.
    pub fn pointer_down(&self, event: PointerEvent) {
        let target = event.target;
        self.dispatch(EventKind::PointerDown, target, &InputEvent::Pointer(event));
    }

    pub fn pointer_move(&self, position: Point) {
        let event = PointerEvent::new(position);
        self.dispatch(EventKind::PointerMove, None, &InputEvent::Pointer(event));
    }

    /// Emit a pointer-move and hand back the event so tests can inspect its
    /// consumption flags afterwards.
    pub fn pointer_move_event(&self, position: Point) -> PointerEvent {
        let event = PointerEvent::new(position);
        self.dispatch(
            EventKind::PointerMove,
            None,
            &InputEvent::Pointer(event.clone()),
        );
        event
    }

    pub fn pointer_up(&self, position: Point) {
        let event = PointerEvent::new(position);
        self.dispatch(EventKind::PointerUp, None, &InputEvent::Pointer(event));
    }

    pub fn key_down(&self, key: Key) {
        self.dispatch(EventKind::KeyDown, None, &InputEvent::Key(KeyEvent::new(key)));
    }

    pub fn touch_move(&self) {
        self.dispatch(EventKind::TouchMove, None, &InputEvent::Touch);
    }

    /// Total live subscriptions, session listeners and construction-time
    /// listeners alike.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }

    fn dispatch(&self, kind: EventKind, target: Option<ElementId>, event: &InputEvent) {
        // Snapshot so handlers may mutate the subscription list mid-dispatch.
        let snapshot: Vec<(ListenerId, ListenerScope, EventHandler)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind)
            .map(|listener| (listener.id, listener.scope, Rc::clone(&listener.handler)))
            .collect();

        for (id, scope, handler) in snapshot {
            let in_scope = match scope {
                ListenerScope::Document => true,
                ListenerScope::Element(element) => target == Some(element),
            };
            if !in_scope {
                continue;
            }
            // Skip listeners removed by an earlier handler of this event.
            let still_subscribed = self
                .listeners
                .borrow()
                .iter()
                .any(|listener| listener.id == id);
            if still_subscribed {
                handler(event);
            }
        }
    }
}

impl EventSource for TestEventSource {
    fn subscribe(
        &self,
        scope: ListenerScope,
        kind: EventKind,
        handler: EventHandler,
    ) -> ListenerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.listeners.borrow_mut().push(Listener {
            id,
            scope,
            kind,
            handler,
        });
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|listener| listener.id != id);
    }
}
