//! Platform-independent pointer and keyboard event types.
//!
//! Events are produced by a platform integration and consumed by sensors.
//! Pointer events carry shared consumption and default-prevention flags so
//! a sensor can suppress propagation to other handlers and suppress the
//! platform's default behavior; the flags travel across clones via
//! `Rc<Cell<bool>>`.

use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::Point;

/// Opaque handle to a platform element.
pub type ElementId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Back,
    Forward,
}

/// A pointer-down/move/up event in client coordinates.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    /// False for secondary touch points of a multi-touch interaction.
    pub is_primary: bool,
    /// The element under the pointer, when the platform resolved one.
    pub target: Option<ElementId>,
    consumed: Rc<Cell<bool>>,
    default_prevented: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            is_primary: true,
            target: None,
            consumed: Rc::new(Cell::new(false)),
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_target(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn secondary_pointer(mut self) -> Self {
        self.is_primary = false;
        self
    }

    /// Mark this event as consumed, preventing other handlers from
    /// processing it. Consumption is shared across clones.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Suppress the platform's default behavior for this event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Keys a drag interaction layer cares about. Only `Escape` is significant
/// to the pointer sensor; the rest exist for keyboard-driven sensors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Unknown,
}

/// A key-down event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}
