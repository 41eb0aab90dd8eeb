//! Core types for the Dragwise drag-and-drop interaction layer.
//!
//! This crate holds the platform-independent vocabulary shared by every
//! sensor implementation: geometry, pointer/keyboard events, activation
//! constraints, and the contract of the drag-operation controller that
//! sensors drive.

pub mod constraints;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod measurement;
pub mod source;

pub use constraints::{ActivationConstraints, DelayConstraint, DistanceConstraint};
pub use controller::{ControllerStatus, DragController, SourceId};
pub use events::{ElementId, Key, KeyEvent, PointerButton, PointerEvent};
pub use geometry::{Delta, Point};
pub use measurement::DistanceMeasurement;
pub use source::DragSource;
