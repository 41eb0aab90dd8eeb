//! A drag controller that records every command it receives.

use std::cell::{Cell, RefCell};

use dragwise_core::{ControllerStatus, DragController, Point, SourceId};

/// One lifecycle command as seen by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SetDragSource(SourceId),
    Start(Point),
    Move(Point),
    Cancel,
    Stop,
}

/// Implements [`DragController`] for tests: appends every command to a log
/// and tracks its status the way a real controller would (`start` makes it
/// dragging, `cancel`/`stop` make it idle again).
pub struct RecordingController {
    commands: RefCell<Vec<Command>>,
    status: Cell<ControllerStatus>,
}

impl Default for RecordingController {
    fn default() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            status: Cell::new(ControllerStatus::Idle),
        }
    }
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    /// Commands received so far, discarding the log.
    pub fn take_commands(&self) -> Vec<Command> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }
}

impl DragController for RecordingController {
    fn status(&self) -> ControllerStatus {
        self.status.get()
    }

    fn set_drag_source(&self, id: SourceId) {
        self.commands.borrow_mut().push(Command::SetDragSource(id));
    }

    fn start(&self, coordinates: Point) {
        self.commands.borrow_mut().push(Command::Start(coordinates));
        self.status.set(ControllerStatus::Dragging);
    }

    fn move_to(&self, coordinates: Point) {
        self.commands.borrow_mut().push(Command::Move(coordinates));
    }

    fn cancel(&self) {
        self.commands.borrow_mut().push(Command::Cancel);
        self.status.set(ControllerStatus::Idle);
    }

    fn stop(&self) {
        self.commands.borrow_mut().push(Command::Stop);
        self.status.set(ControllerStatus::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tracks_the_drag_lifecycle() {
        let controller = RecordingController::new();
        assert_eq!(controller.status(), ControllerStatus::Idle);

        controller.start(Point::ZERO);
        assert_eq!(controller.status(), ControllerStatus::Dragging);

        controller.stop();
        assert_eq!(controller.status(), ControllerStatus::Idle);

        controller.start(Point::ZERO);
        controller.cancel();
        assert_eq!(controller.status(), ControllerStatus::Idle);
    }

    #[test]
    fn records_commands_in_order() {
        let controller = RecordingController::new();
        controller.set_drag_source(4);
        controller.start(Point::ZERO);
        controller.move_to(Point::new(3.0, 0.0));
        controller.stop();

        assert_eq!(
            controller.take_commands(),
            vec![
                Command::SetDragSource(4),
                Command::Start(Point::ZERO),
                Command::Move(Point::new(3.0, 0.0)),
                Command::Stop,
            ]
        );
        assert!(controller.commands().is_empty());
    }
}
