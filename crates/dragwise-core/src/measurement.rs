//! Distance measurements and their evaluation against a displacement.

use crate::geometry::Delta;

/// How far a pointer must travel before a threshold is considered crossed.
///
/// A measurement is either a scalar radius or a per-axis threshold where
/// either axis may be absent. The shape is validated structurally at
/// evaluation time, not at construction: `Axes { x: None, y: None }` is a
/// legal value that is simply never exceeded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistanceMeasurement {
    /// A radius; exceeded when the Euclidean norm of the displacement is
    /// strictly greater.
    Scalar(f32),
    /// Per-axis thresholds. When both axes are present, **both** must be
    /// exceeded (conjunction): a single large-axis movement alone does not
    /// trip a two-axis threshold. With one axis present, the other axis of
    /// the displacement is ignored.
    Axes { x: Option<f32>, y: Option<f32> },
}

impl DistanceMeasurement {
    /// Returns true when `delta` exceeds this measurement.
    ///
    /// Degenerate shapes (`Axes` with neither axis present) fail open and
    /// report "not exceeded".
    pub fn exceeded_by(&self, delta: Delta) -> bool {
        match *self {
            DistanceMeasurement::Scalar(radius) => delta.magnitude() > radius,
            DistanceMeasurement::Axes {
                x: Some(x),
                y: Some(y),
            } => delta.x.abs() > x && delta.y.abs() > y,
            DistanceMeasurement::Axes { x: Some(x), y: None } => delta.x.abs() > x,
            DistanceMeasurement::Axes { x: None, y: Some(y) } => delta.y.abs() > y,
            DistanceMeasurement::Axes { x: None, y: None } => {
                log::debug!("distance measurement with no axes; treating as not exceeded");
                false
            }
        }
    }
}
