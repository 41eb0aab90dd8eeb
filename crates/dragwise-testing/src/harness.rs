//! Wires the fakes to a real pointer sensor for integration tests.

use std::rc::Rc;

use dragwise_core::{DragController, DragSource, Key, Point, PointerEvent};
use dragwise_sensor::{EventSource, PointerSensor, Sensor, TimerDriver, Unbinder};

use crate::clock::ManualTimerDriver;
use crate::controller::{Command, RecordingController};
use crate::events::TestEventSource;

/// A pointer sensor wired to a scripted event source, a manual clock, and
/// a recording controller. Tests drive input through the helpers and
/// assert on [`commands`](SensorHarness::commands).
pub struct SensorHarness {
    pub events: Rc<TestEventSource>,
    pub timers: Rc<ManualTimerDriver>,
    pub controller: Rc<RecordingController>,
    pub sensor: PointerSensor,
}

impl SensorHarness {
    pub fn new() -> Self {
        let events = Rc::new(TestEventSource::new());
        let timers = Rc::new(ManualTimerDriver::new());
        let controller = Rc::new(RecordingController::new());
        let sensor = PointerSensor::new(
            Rc::clone(&events) as Rc<dyn EventSource>,
            Rc::clone(&timers) as Rc<dyn TimerDriver>,
            Rc::clone(&controller) as Rc<dyn DragController>,
        );
        Self {
            events,
            timers,
            controller,
            sensor,
        }
    }

    /// Bind a source and keep the unbinder alive for the caller.
    pub fn bind(&self, source: Rc<DragSource>) -> Unbinder {
        self.sensor.bind(source)
    }

    /// A qualifying primary-button press on `target`.
    pub fn press(&self, target: u64, position: Point) -> PointerEvent {
        let event = PointerEvent::new(position).with_target(target);
        self.events.pointer_down(event.clone());
        event
    }

    pub fn drag_to(&self, position: Point) {
        self.events.pointer_move(position);
    }

    pub fn release_at(&self, position: Point) {
        self.events.pointer_up(position);
    }

    pub fn escape(&self) {
        self.events.key_down(Key::Escape);
    }

    pub fn advance(&self, ms: u64) {
        self.timers.advance(ms);
    }

    pub fn commands(&self) -> Vec<Command> {
        self.controller.commands()
    }
}

impl Default for SensorHarness {
    fn default() -> Self {
        Self::new()
    }
}
