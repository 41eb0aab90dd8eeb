//! The pointer drag sensor.
//!
//! A qualifying pointer-down arms a candidate gesture; the session then
//! either promotes to a drag once its activation constraints are satisfied
//! or is cancelled by movement beyond a tolerance, an early pointer-up, or
//! Escape. Every transition runs to completion inside the handler of the
//! event that triggered it, so transitions never interleave. The only
//! asynchronous suspension point is the delay timer, and teardown cancels
//! it synchronously, which makes a start after a terminal transition
//! structurally impossible.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dragwise_core::{
    ActivationConstraints, ControllerStatus, Delta, DragController, DragSource, Key, Point,
    PointerButton, PointerEvent,
};

use crate::listeners::{
    EventHandler, EventKind, EventSource, InputEvent, ListenerBatch, ListenerId, ListenerScope,
};
use crate::timer::{ActivationTimer, TimerDriver};
use crate::{Sensor, Unbinder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionStatus {
    /// Pointer is down, constraints not yet satisfied.
    Armed,
    /// The drag is active; moves are forwarded to the controller.
    Dragging,
}

/// The live state of one candidate gesture. Idle is the absence of a
/// session; the initial coordinates therefore exist exactly as long as the
/// gesture does, and the timer only while armed with a delay constraint.
struct PointerSession {
    status: SessionStatus,
    initial_coordinates: Point,
    timer: Option<ActivationTimer>,
    listeners: ListenerBatch,
    constraints: ActivationConstraints,
}

impl PointerSession {
    fn timer_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(ActivationTimer::is_pending)
    }
}

struct SensorInner {
    events: Rc<dyn EventSource>,
    timers: Rc<dyn TimerDriver>,
    controller: Rc<dyn DragController>,
    session: RefCell<Option<PointerSession>>,
}

/// Recognizes drag gestures from pointer input and drives an external
/// drag-operation controller.
///
/// One sensor tracks at most one session at a time, across however many
/// sources it is bound to.
pub struct PointerSensor {
    inner: Rc<SensorInner>,
    touch_suppressor: Cell<Option<ListenerId>>,
}

impl PointerSensor {
    pub fn new(
        events: Rc<dyn EventSource>,
        timers: Rc<dyn TimerDriver>,
        controller: Rc<dyn DragController>,
    ) -> Self {
        // Platform compatibility shim: some platforms ignore prevent_default
        // from touch-move handlers added mid-gesture unless at least one
        // touch-move listener existed beforehand. The handler itself decides
        // nothing.
        let touch_suppressor = events.subscribe(
            ListenerScope::Document,
            EventKind::TouchMove,
            Rc::new(|_: &InputEvent| {}),
        );
        Self {
            inner: Rc::new(SensorInner {
                events,
                timers,
                controller,
                session: RefCell::new(None),
            }),
            touch_suppressor: Cell::new(Some(touch_suppressor)),
        }
    }
}

impl Sensor for PointerSensor {
    fn bind(&self, source: Rc<DragSource>) -> Unbinder {
        let target = source.activation_target();
        let weak = Rc::downgrade(&self.inner);
        let handler: EventHandler = Rc::new(move |input: &InputEvent| {
            if let Some(inner) = weak.upgrade() {
                if let InputEvent::Pointer(event) = input {
                    handle_pointer_down(&inner, &source, event);
                }
            }
        });
        let id = self
            .inner
            .events
            .subscribe(ListenerScope::Element(target), EventKind::PointerDown, handler);
        Unbinder::new(Rc::clone(&self.inner.events), id)
    }

    fn dispose(&self) {
        cancel_session(&self.inner);
        if let Some(id) = self.touch_suppressor.take() {
            self.inner.events.unsubscribe(id);
        }
    }
}

fn handle_pointer_down(inner: &Rc<SensorInner>, source: &Rc<DragSource>, event: &PointerEvent) {
    if !event.is_primary || event.button != PointerButton::Primary {
        log::debug!("ignoring pointer-down: not the primary pointer/button");
        return;
    }
    if source.is_disabled() {
        log::debug!("ignoring pointer-down: source {} is disabled", source.id);
        return;
    }
    if event.target.is_none() {
        log::debug!("ignoring pointer-down: no concrete element target");
        return;
    }
    if inner.session.borrow().is_some() {
        log::debug!("ignoring pointer-down: a session is already live");
        return;
    }

    // Read fresh for every gesture; a rebinding between gestures must take
    // effect without re-arming anything.
    let constraints = source.constraints;

    // Session listeners are registered before this handler returns, so no
    // event arriving after the pointer-down can be missed.
    let mut listeners = ListenerBatch::new(Rc::clone(&inner.events));
    let weak = Rc::downgrade(inner);
    listeners.subscribe(ListenerScope::Document, EventKind::PointerMove, {
        let weak = weak.clone();
        Rc::new(move |input: &InputEvent| {
            if let Some(inner) = weak.upgrade() {
                if let InputEvent::Pointer(event) = input {
                    handle_pointer_move(&inner, event);
                }
            }
        })
    });
    listeners.subscribe(ListenerScope::Document, EventKind::PointerUp, {
        let weak = weak.clone();
        Rc::new(move |input: &InputEvent| {
            if let Some(inner) = weak.upgrade() {
                if let InputEvent::Pointer(_) = input {
                    handle_pointer_up(&inner);
                }
            }
        })
    });
    listeners.subscribe(ListenerScope::Document, EventKind::KeyDown, {
        let weak = weak.clone();
        Rc::new(move |input: &InputEvent| {
            if let Some(inner) = weak.upgrade() {
                if let InputEvent::Key(key_event) = input {
                    if key_event.key == Key::Escape {
                        cancel_session(&inner);
                    }
                }
            }
        })
    });

    *inner.session.borrow_mut() = Some(PointerSession {
        status: SessionStatus::Armed,
        initial_coordinates: event.position,
        timer: None,
        listeners,
        constraints,
    });
    log::trace!("armed at {:?} for source {}", event.position, source.id);
    inner.controller.set_drag_source(source.id);

    if constraints.is_none() {
        // Immediate activation: keep the originating event away from other
        // handlers (e.g. text selection, nested clickables).
        event.consume();
        start_drag(inner);
        return;
    }

    if let Some(delay) = constraints.delay {
        let weak = Rc::downgrade(inner);
        let timer = ActivationTimer::schedule(
            inner.timers.as_ref(),
            Duration::from_millis(delay.value_ms),
            move || {
                if let Some(inner) = weak.upgrade() {
                    start_drag(&inner);
                }
            },
        );
        if let Some(session) = inner.session.borrow_mut().as_mut() {
            session.timer = Some(timer);
        }
    }
}

/// What an armed-state movement sample resolved to.
enum MoveAction {
    None,
    Forward(Point),
    Promote,
    Abort,
}

fn handle_pointer_move(inner: &Rc<SensorInner>, event: &PointerEvent) {
    let action = {
        let session = inner.session.borrow();
        match session.as_ref() {
            None => MoveAction::None,
            Some(session) => match session.status {
                SessionStatus::Dragging => MoveAction::Forward(event.position),
                SessionStatus::Armed => {
                    evaluate_armed_move(session, event.position - session.initial_coordinates)
                }
            },
        }
    };

    match action {
        MoveAction::Forward(position) => {
            event.prevent_default();
            event.consume();
            inner.controller.move_to(position);
        }
        MoveAction::Promote => start_drag(inner),
        MoveAction::Abort => cancel_session(inner),
        MoveAction::None => {}
    }
}

/// Applies the constraint checks in their fixed order: distance tolerance,
/// then distance value, then delay tolerance. Tolerance wins ties because
/// it is checked first on the same sample.
fn evaluate_armed_move(session: &PointerSession, delta: Delta) -> MoveAction {
    let constraints = &session.constraints;
    if let Some(distance) = &constraints.distance {
        if let Some(tolerance) = &distance.tolerance {
            if tolerance.exceeded_by(delta) {
                return MoveAction::Abort;
            }
        }
        if distance.value.exceeded_by(delta) {
            return MoveAction::Promote;
        }
    }
    if let Some(delay) = &constraints.delay {
        if session.timer_pending() && delay.tolerance.exceeded_by(delta) {
            return MoveAction::Abort;
        }
    }
    MoveAction::None
}

fn handle_pointer_up(inner: &Rc<SensorInner>) {
    let status = inner.session.borrow().as_ref().map(|session| session.status);
    match status {
        Some(SessionStatus::Dragging) => stop_session(inner),
        // Released before activation: never a drag.
        Some(SessionStatus::Armed) => cancel_session(inner),
        None => {}
    }
}

/// Promotes an armed session to a drag, guarded by the controller reading
/// idle immediately before the `start` call.
fn start_drag(inner: &Rc<SensorInner>) {
    let coordinates = {
        let session = inner.session.borrow();
        match session.as_ref() {
            Some(session) if session.status == SessionStatus::Armed => {
                Some(session.initial_coordinates)
            }
            _ => None,
        }
    };
    let coordinates = match coordinates {
        Some(coordinates) => coordinates,
        None => return,
    };
    if inner.controller.status() != ControllerStatus::Idle {
        log::warn!("drag start suppressed: controller is not idle");
        return;
    }
    if let Some(session) = inner.session.borrow_mut().as_mut() {
        session.status = SessionStatus::Dragging;
        if let Some(timer) = session.timer.take() {
            timer.cancel();
        }
    }
    log::trace!("drag started at {:?}", coordinates);
    inner.controller.start(coordinates);
}

/// Terminal cancel. Tears the session down idempotently; the controller is
/// only told when it actually has a drag in flight, so cancelling an armed
/// or already-idle session issues no command.
fn cancel_session(inner: &Rc<SensorInner>) {
    if !teardown(inner) {
        return;
    }
    if inner.controller.status() == ControllerStatus::Dragging {
        inner.controller.cancel();
    }
}

/// Terminal stop: the pointer was released during an active drag.
fn stop_session(inner: &Rc<SensorInner>) {
    if !teardown(inner) {
        return;
    }
    inner.controller.stop();
}

/// Releases everything the session holds: the pending timer (so a delayed
/// start can never fire afterwards) and the listener batch, exactly once.
/// Returns whether a session existed.
fn teardown(inner: &Rc<SensorInner>) -> bool {
    let session = inner.session.borrow_mut().take();
    match session {
        Some(mut session) => {
            if let Some(timer) = session.timer.take() {
                timer.cancel();
            }
            session.listeners.unbind();
            log::trace!("session torn down");
            true
        }
        None => false,
    }
}
