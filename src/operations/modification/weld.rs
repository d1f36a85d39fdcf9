use crate::error::{OperationError, Result};
use crate::geometry::Polyline;
use crate::math::polygon_2d::polyline_is_simple;
use crate::math::{Point2, LENGTH_TOLERANCE};

/// Merges two line segments that share an endpoint into one continuous line.
///
/// Source datasets sometimes record one physical runway as two directional
/// pieces meeting at a common vertex. The welded line keeps the direction of
/// the first input where possible; the shared vertex appears once.
#[derive(Debug)]
pub struct WeldLines {
    line_a: Polyline,
    line_b: Polyline,
}

impl WeldLines {
    /// Creates a new `WeldLines` operation.
    #[must_use]
    pub fn new(line_a: Polyline, line_b: Polyline) -> Self {
        Self { line_a, line_b }
    }

    /// Executes the weld.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Disjoint` if no endpoint of one line meets an
    /// endpoint of the other, or if the joined line overlaps or crosses
    /// itself.
    pub fn execute(&self) -> Result<Polyline> {
        let a = &self.line_a;
        let b = &self.line_b;

        // (head, tail): tail continues from the end of head.
        let (head, tail) = if coincident(&a.end(), &b.start()) {
            (a.clone(), b.clone())
        } else if coincident(&a.end(), &b.end()) {
            (a.clone(), b.reversed())
        } else if coincident(&a.start(), &b.end()) {
            (b.clone(), a.clone())
        } else if coincident(&a.start(), &b.start()) {
            (b.reversed(), a.clone())
        } else {
            return Err(OperationError::Disjoint.into());
        };

        let mut points = head.into_points();
        points.extend(tail.points().iter().skip(1));
        if !polyline_is_simple(&points) {
            return Err(OperationError::Disjoint.into());
        }
        Polyline::new(points)
    }
}

fn coincident(p: &Point2, q: &Point2) -> bool {
    (p - q).norm() < LENGTH_TOLERANCE
}
