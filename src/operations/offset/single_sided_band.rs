use geo::{LineString, Polygon};
use tracing::trace;

use super::parallel_offset::offset_signed;
use crate::error::{GeometryError, Result};
use crate::geometry::Polyline;
use crate::math::polygon_2d::{ring_is_simple, signed_area_2d};
use crate::math::{to_coord, Point2, LENGTH_TOLERANCE};

/// Grows a line into a band lying on one side of a reference offset.
///
/// Perpendicular coordinates are signed, positive to the left of the line's
/// direction. The band covers `near_distance` to `near_distance - width`, so
/// a positive `width` grows the band rightward and a negative one leftward.
/// It runs the full length of the line and has flat ends square to the line
/// at both endpoints.
///
/// The exterior ring is counter-clockwise and snapped to the kernel grid.
#[derive(Debug)]
pub struct SingleSidedBand {
    line: Polyline,
    near_distance: f64,
    width: f64,
}

impl SingleSidedBand {
    /// Creates a new band operation.
    #[must_use]
    pub fn new(line: Polyline, near_distance: f64, width: f64) -> Self {
        Self {
            line,
            near_distance,
            width,
        }
    }

    /// Band centered on the line with total width `width`.
    #[must_use]
    pub fn centered(line: Polyline, width: f64) -> Self {
        Self::new(line, width * 0.5, width)
    }

    /// Executes the operation, returning the band polygon.
    ///
    /// # Errors
    ///
    /// - `GeometryError::Degenerate` if the width is zero or not finite, or the
    ///   line cannot be offset
    /// - `GeometryError::NonSimpleResult` if the band ring self-intersects
    pub fn execute(&self) -> Result<Polygon<f64>> {
        if !self.width.is_finite() || self.width.abs() < LENGTH_TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "band width {} must be finite and non-zero",
                self.width
            ))
            .into());
        }

        let near = offset_signed(&self.line, self.near_distance)?;
        let far = offset_signed(&self.line, self.near_distance - self.width)?;

        let mut ring: Vec<Point2> = near.into_points();
        ring.extend(far.into_points().into_iter().rev());
        if signed_area_2d(&ring) < 0.0 {
            ring.reverse();
        }

        if !ring_is_simple(&ring) {
            return Err(GeometryError::NonSimpleResult(format!(
                "band at {} with width {} self-intersects",
                self.near_distance, self.width
            ))
            .into());
        }

        trace!(
            near = self.near_distance,
            width = self.width,
            vertices = ring.len(),
            "built single-sided band"
        );

        let exterior: LineString<f64> = ring.iter().map(to_coord).collect();
        Ok(Polygon::new(exterior, Vec::new()))
    }
}
