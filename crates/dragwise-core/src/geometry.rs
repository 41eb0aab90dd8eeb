//! Geometric primitives: Point and Delta.

use std::ops::Sub;

/// A position in client/viewport coordinates, as delivered by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// The displacement between two points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Delta {
    pub x: f32,
    pub y: f32,
}

impl Delta {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Delta = Delta { x: 0.0, y: 0.0 };

    /// Euclidean norm of the displacement.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Sub for Point {
    type Output = Delta;

    fn sub(self, other: Point) -> Delta {
        Delta::new(self.x - other.x, self.y - other.y)
    }
}
