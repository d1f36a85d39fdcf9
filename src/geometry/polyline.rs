use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::polyline_length;
use crate::math::{from_coord, Point2};

/// An open polyline in the projected plane.
///
/// Direction of travel runs from the first to the last vertex; every
/// left/right decision in the crate is taken relative to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from at least two finite points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than 2 points and
    /// `GeometryError::NonFinite` for NaN or infinite coordinates.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "polyline needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::NonFinite { x: p.x, y: p.y }.into());
        }
        Ok(Self { points })
    }

    /// Returns the vertices in travel order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the polyline, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// First vertex.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Last vertex.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Total length along the polyline.
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }

    /// Midpoint of the axis-aligned bounding extent.
    ///
    /// For a straight line this is the midpoint of the segment.
    #[must_use]
    pub fn extent_center(&self) -> Point2 {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Point2::new((min_x + max_x) * 0.5, (min_y + max_y) * 0.5)
    }

    /// Returns a new polyline travelling in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Converts to a `geo` line string (no snapping).
    #[must_use]
    pub fn to_line_string(&self) -> geo::LineString<f64> {
        self.points
            .iter()
            .map(|p| geo::Coord { x: p.x, y: p.y })
            .collect()
    }
}

impl TryFrom<&geo::LineString<f64>> for Polyline {
    type Error = crate::error::ZoneError;

    fn try_from(line: &geo::LineString<f64>) -> Result<Self> {
        Self::new(line.coords().copied().map(from_coord).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ZoneError;

    #[test]
    fn rejects_single_point() {
        let err = Polyline::new(vec![Point2::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ZoneError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn rejects_nan() {
        let err = Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(f64::NAN, 1.0)])
            .unwrap_err();
        assert!(matches!(err, ZoneError::Geometry(GeometryError::NonFinite { .. })));
    }

    #[test]
    fn extent_center_of_segment_is_midpoint() {
        let line = Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(3000.0, 400.0)]).unwrap();
        let c = line.extent_center();
        assert!((c.x - 1500.0).abs() < 1e-12);
        assert!((c.y - 200.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let line = Polyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 2.0),
        ])
        .unwrap();
        let rev = line.reversed();
        assert_eq!(rev.start(), line.end());
        assert_eq!(rev.end(), line.start());
        assert!((rev.length() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn line_string_round_trip_keeps_vertices() {
        let line = Polyline::new(vec![Point2::new(1.5, -2.0), Point2::new(4.0, 8.0)]).unwrap();
        let back = Polyline::try_from(&line.to_line_string()).unwrap();
        assert_eq!(back, line);
    }
}
