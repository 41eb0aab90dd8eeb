//! Draggable source descriptions.

use std::cell::Cell;

use crate::constraints::ActivationConstraints;
use crate::controller::SourceId;
use crate::events::ElementId;

/// One draggable source as registered by the surrounding interaction
/// layer. The layer owns the value and shares it with sensors as
/// `Rc<DragSource>`; sensors only ever read it.
#[derive(Debug)]
pub struct DragSource {
    pub id: SourceId,
    /// The element being dragged.
    pub element: ElementId,
    /// Optional sub-region that must receive the pointer-down for the
    /// gesture to qualify (a drag handle). Defaults to the element itself.
    pub activator: Option<ElementId>,
    disabled: Cell<bool>,
    pub constraints: ActivationConstraints,
}

impl DragSource {
    pub fn new(id: SourceId, element: ElementId) -> Self {
        Self {
            id,
            element,
            activator: None,
            disabled: Cell::new(false),
            constraints: ActivationConstraints::NONE,
        }
    }

    pub fn with_activator(mut self, activator: ElementId) -> Self {
        self.activator = Some(activator);
        self
    }

    pub fn with_constraints(mut self, constraints: ActivationConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// The element a qualifying pointer-down must land on.
    pub fn activation_target(&self) -> ElementId {
        self.activator.unwrap_or(self.element)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Toggle the source live; takes effect on the next gesture.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_target_prefers_activator() {
        let source = DragSource::new(1, 10);
        assert_eq!(source.activation_target(), 10);
        let handled = DragSource::new(2, 10).with_activator(11);
        assert_eq!(handled.activation_target(), 11);
    }

    #[test]
    fn disabled_flag_toggles_live() {
        let source = DragSource::new(1, 10);
        assert!(!source.is_disabled());
        source.set_disabled(true);
        assert!(source.is_disabled());
    }
}
