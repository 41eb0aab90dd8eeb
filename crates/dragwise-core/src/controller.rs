//! The contract between sensors and the drag-operation controller.

use crate::geometry::Point;

/// Identifies a draggable source registered with the interaction layer.
pub type SourceId = u64;

/// The controller's externally visible state. Sensors consult it as a
/// defensive gate before issuing `start` and `cancel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerStatus {
    Idle,
    Dragging,
}

/// Receives the lifecycle commands a sensor derives from raw input.
///
/// Sensors never mutate controller state beyond these calls. All commands
/// execute synchronously within the event handler that produced them.
pub trait DragController {
    fn status(&self) -> ControllerStatus;

    /// Announces which source a candidate gesture belongs to. Issued at
    /// arming, before any `start`.
    fn set_drag_source(&self, id: SourceId);

    /// Begin a drag at the gesture's initial coordinates.
    fn start(&self, coordinates: Point);

    /// Forward a pointer movement of an active drag.
    fn move_to(&self, coordinates: Point);

    /// Abort an active drag.
    fn cancel(&self);

    /// Complete an active drag.
    fn stop(&self);
}
