//! Activation constraints: the rules a candidate gesture must satisfy
//! before it is promoted to a drag.

use crate::measurement::DistanceMeasurement;

/// Promote once the pointer has travelled past `value`.
///
/// The optional `tolerance` caps how far the pointer may stray while the
/// constraint is still unmet; exceeding it aborts the candidate gesture
/// outright. Tolerance is always evaluated before the value on the same
/// movement sample, so tolerance wins ties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceConstraint {
    pub value: DistanceMeasurement,
    pub tolerance: Option<DistanceMeasurement>,
}

/// Promote once `value_ms` milliseconds have elapsed since arming.
///
/// Any movement exceeding `tolerance` while the delay is still pending
/// aborts the candidate gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayConstraint {
    pub value_ms: u64,
    pub tolerance: DistanceMeasurement,
}

/// The full constraint configuration for one drag source.
///
/// Immutable for the lifetime of a binding; sensors read it fresh from the
/// source on every new gesture rather than caching it across gestures.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ActivationConstraints {
    pub distance: Option<DistanceConstraint>,
    pub delay: Option<DelayConstraint>,
}

impl ActivationConstraints {
    pub const NONE: ActivationConstraints = ActivationConstraints {
        distance: None,
        delay: None,
    };

    pub fn distance(value: DistanceMeasurement) -> Self {
        Self {
            distance: Some(DistanceConstraint {
                value,
                tolerance: None,
            }),
            delay: None,
        }
    }

    pub fn delay(value_ms: u64, tolerance: DistanceMeasurement) -> Self {
        Self {
            distance: None,
            delay: Some(DelayConstraint {
                value_ms,
                tolerance,
            }),
        }
    }

    pub fn with_distance_tolerance(mut self, tolerance: DistanceMeasurement) -> Self {
        if let Some(distance) = self.distance.as_mut() {
            distance.tolerance = Some(tolerance);
        }
        self
    }

    pub fn with_delay(mut self, value_ms: u64, tolerance: DistanceMeasurement) -> Self {
        self.delay = Some(DelayConstraint {
            value_ms,
            tolerance,
        });
        self
    }

    /// True when no constraint is configured, i.e. a qualifying
    /// pointer-down promotes to a drag immediately.
    pub fn is_none(&self) -> bool {
        self.distance.is_none() && self.delay.is_none()
    }
}
