use super::Polyline;
use crate::error::{GeometryError, Result};
use crate::math::{Point2, LENGTH_TOLERANCE};
use crate::operations::modification::WeldLines;

/// A runway centerline: an ordered polyline of positive length in a
/// projected, distance-preserving plane.
///
/// Immutable once built; zone construction only derives new geometry from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    line: Polyline,
}

impl Centerline {
    /// Creates a centerline from two or more points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points do not form a line of
    /// positive length, or `GeometryError::NonFinite` for NaN/infinite input.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        Self::from_polyline(Polyline::new(points)?)
    }

    /// Creates a straight centerline between two threshold points.
    ///
    /// # Errors
    ///
    /// Same as [`Centerline::new`].
    pub fn from_endpoints(start: Point2, end: Point2) -> Result<Self> {
        Self::new(vec![start, end])
    }

    /// Wraps an existing polyline after checking its length.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polyline has zero length.
    pub fn from_polyline(line: Polyline) -> Result<Self> {
        let length = line.length();
        if length < LENGTH_TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "centerline length {length} is not positive"
            ))
            .into());
        }
        Ok(Self { line })
    }

    /// Joins two records of one physical runway that share an endpoint.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Disjoint` if the lines share no endpoint.
    pub fn weld(a: &Polyline, b: &Polyline) -> Result<Self> {
        Self::from_polyline(WeldLines::new(a.clone(), b.clone()).execute()?)
    }

    /// Returns the underlying polyline.
    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        &self.line
    }

    /// Total centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.line.length()
    }
}

impl TryFrom<&geo::LineString<f64>> for Centerline {
    type Error = crate::error::ZoneError;

    fn try_from(line: &geo::LineString<f64>) -> Result<Self> {
        Self::from_polyline(Polyline::try_from(line)?)
    }
}
