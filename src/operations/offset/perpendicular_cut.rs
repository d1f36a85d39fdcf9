use geo::Polygon;

use super::{ParallelOffset2D, SingleSidedBand};
use crate::error::Result;
use crate::geometry::{CutEnd, Polyline, Side};

/// Builds a cross-line at one end of a line, joining the corresponding
/// endpoints of its left and right parallels at `half_width`.
///
/// The cross-line always runs from the left parallel to the right one, so
/// its own left side faces away from the line at the far end and back along
/// the line at the near end.
#[derive(Debug)]
pub struct PerpendicularCut {
    line: Polyline,
    half_width: f64,
    end: CutEnd,
}

impl PerpendicularCut {
    /// Creates a new perpendicular cut operation.
    #[must_use]
    pub fn new(line: Polyline, half_width: f64, end: CutEnd) -> Self {
        Self {
            line,
            half_width,
            end,
        }
    }

    /// Executes the operation, returning the cross-line.
    ///
    /// # Errors
    ///
    /// Returns an error if either parallel cannot be built.
    pub fn execute(&self) -> Result<Polyline> {
        let left = ParallelOffset2D::new(self.line.clone(), self.half_width, Side::Left).execute()?;
        let right =
            ParallelOffset2D::new(self.line.clone(), self.half_width, Side::Right).execute()?;
        let points = match self.end {
            CutEnd::Far => vec![left.end(), right.end()],
            CutEnd::Near => vec![left.start(), right.start()],
        };
        Polyline::new(points)
    }

    /// Grows the cross-line into a cutting polygon of the given depth that
    /// reaches back from the selected end toward the line's interior.
    ///
    /// # Errors
    ///
    /// Returns an error if the cross-line or its band cannot be built.
    pub fn cutting_polygon(&self, depth: f64) -> Result<Polygon<f64>> {
        let cross = self.execute()?;
        // Left of the cross-line faces inward at the near end, outward at the far end.
        let width = match self.end {
            CutEnd::Far => depth,
            CutEnd::Near => -depth,
        };
        SingleSidedBand::new(cross, 0.0, width).execute()
    }
}
