//! Gesture sensors for the Dragwise drag-and-drop interaction layer.
//!
//! A sensor turns raw platform input into drag lifecycle commands. This
//! crate ships the pointer sensor (the press/move/release state machine
//! with optional distance and delay activation constraints) plus the
//! timer and listener plumbing it is built on. Alternative input
//! modalities (keyboard, touch gestures) would implement the same
//! [`Sensor`] contract.

pub mod listeners;
pub mod pointer;
pub mod timer;

use std::cell::Cell;
use std::rc::Rc;

use dragwise_core::DragSource;

pub use listeners::{
    EventHandler, EventKind, EventSource, InputEvent, ListenerBatch, ListenerId, ListenerScope,
};
pub use pointer::PointerSensor;
pub use timer::{ActivationTimer, PolledTimerDriver, TimerDriver, TimerTask};

/// The contract every sensor variant implements. Sensors share no state
/// with each other; each owns its own sessions.
pub trait Sensor {
    /// Start watching a source for gesture activation. The returned
    /// [`Unbinder`] detaches the activation listener again.
    fn bind(&self, source: Rc<DragSource>) -> Unbinder;

    /// Tear the sensor down: aborts any live session and releases every
    /// listener the sensor itself installed.
    fn dispose(&self);
}

/// Detaches one source binding. `unbind` is idempotent.
pub struct Unbinder {
    events: Rc<dyn EventSource>,
    id: Cell<Option<ListenerId>>,
}

impl Unbinder {
    pub(crate) fn new(events: Rc<dyn EventSource>, id: ListenerId) -> Self {
        Self {
            events,
            id: Cell::new(Some(id)),
        }
    }

    pub fn unbind(&self) {
        if let Some(id) = self.id.take() {
            self.events.unsubscribe(id);
        }
    }
}
