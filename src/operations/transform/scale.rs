use crate::error::{OperationError, Result};
use crate::geometry::Polyline;
use crate::math::Point2;

/// Scales a polyline uniformly about the midpoint of its bounding extent.
#[derive(Debug)]
pub struct Scale {
    line: Polyline,
    center: Point2,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation about the line's extent centre.
    #[must_use]
    pub fn about_center(line: Polyline, factor: f64) -> Self {
        let center = line.extent_center();
        Self {
            line,
            center,
            factor,
        }
    }

    /// Executes the scaling, returning a new polyline.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the factor is not finite and
    /// positive (a non-positive factor would collapse or flip the line).
    pub fn execute(&self) -> Result<Polyline> {
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "scale factor {} must be finite and positive",
                self.factor
            ))
            .into());
        }
        let points = self
            .line
            .points()
            .iter()
            .map(|p| self.center + (p - self.center) * self.factor)
            .collect();
        Polyline::new(points)
    }
}
