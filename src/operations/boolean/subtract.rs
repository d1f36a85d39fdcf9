use geo::orient::Direction;
use geo::{Area, BooleanOps, MultiPolygon, Orient};

use crate::math::AREA_TOLERANCE;

/// Computes the planar difference `A - B` of two regions.
///
/// Slivers smaller than `AREA_TOLERANCE` are dropped, and the result is
/// oriented with counter-clockwise exteriors and clockwise holes.
#[derive(Debug)]
pub struct Subtract<'a> {
    region_a: &'a MultiPolygon<f64>,
    region_b: &'a MultiPolygon<f64>,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(region_a: &'a MultiPolygon<f64>, region_b: &'a MultiPolygon<f64>) -> Self {
        Self { region_a, region_b }
    }

    /// Executes the subtraction. The result may be empty.
    #[must_use]
    pub fn execute(&self) -> MultiPolygon<f64> {
        let differenced = self.region_a.difference(self.region_b);
        let kept: Vec<_> = differenced
            .0
            .into_iter()
            .filter(|p| p.unsigned_area() >= AREA_TOLERANCE)
            .collect();
        MultiPolygon::new(kept).orient(Direction::Default)
    }
}
