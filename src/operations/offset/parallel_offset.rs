use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Polyline, Side};
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2, LENGTH_TOLERANCE, TOLERANCE};

/// When `cos(angle between consecutive segments) < this`, the line folds
/// back on itself and has no usable parallel.
const REVERSAL_COS: f64 = -0.98;

/// Maximum miter distance as a multiple of `|distance|`. Longer miters are
/// replaced by a bevel (two points).
const MITER_LIMIT: f64 = 4.0;

/// Offsets a line to a parallel at a perpendicular distance on one side.
///
/// The side is taken relative to the line's direction of travel. The result
/// keeps the input's direction and endpoint order: its first vertex is the
/// offset of the input's first vertex, its last vertex the offset of the
/// input's last vertex. Interior corners are mitred (beveled past
/// `MITER_LIMIT`).
#[derive(Debug)]
pub struct ParallelOffset2D {
    line: Polyline,
    distance: f64,
    side: Side,
}

impl ParallelOffset2D {
    /// Creates a new parallel offset operation.
    #[must_use]
    pub fn new(line: Polyline, distance: f64, side: Side) -> Self {
        Self {
            line,
            distance,
            side,
        }
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the distance is negative or not finite
    /// - `GeometryError::Degenerate` for zero-length lines or lines that fold back
    pub fn execute(&self) -> Result<Polyline> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "offset distance {} must be finite and non-negative",
                self.distance
            ))
            .into());
        }
        offset_signed(&self.line, self.side.sign() * self.distance)
    }
}

/// Offsets `line` by a signed distance: positive to the left, negative to the
/// right.
pub(crate) fn offset_signed(line: &Polyline, distance: f64) -> Result<Polyline> {
    let points = dedup_points(line.points());
    if points.len() < 2 {
        return Err(GeometryError::Degenerate("cannot offset a zero-length line".to_owned()).into());
    }
    if distance.abs() < TOLERANCE {
        return Polyline::new(points);
    }

    let n = points.len();
    let segment_count = n - 1;

    // Phase A: offset each segment along its left normal.
    let mut offset_segments: Vec<(Point2, Point2)> = Vec::with_capacity(segment_count);
    let mut directions: Vec<Vector2> = Vec::with_capacity(segment_count);

    for i in 0..segment_count {
        let dir = segment_direction(&points[i], &points[i + 1])?;
        let offset = left_normal(dir) * distance;
        offset_segments.push((points[i] + offset, points[i + 1] + offset));
        directions.push(dir);
    }

    // Phase B: join consecutive offset segments at their corners.
    let mut raw = Vec::with_capacity(n * 2);
    raw.push(offset_segments[0].0);

    for i in 1..segment_count {
        push_corner(
            &mut raw,
            &offset_segments[i - 1],
            &offset_segments[i],
            &directions[i - 1],
            &directions[i],
            &points[i],
            distance,
        )?;
    }

    raw.push(offset_segments[segment_count - 1].1);

    Polyline::new(raw)
}

/// Drops consecutive vertices closer than `LENGTH_TOLERANCE`.
fn dedup_points(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        match out.last() {
            Some(last) if (p - last).norm() < LENGTH_TOLERANCE => {}
            _ => out.push(*p),
        }
    }
    out
}

/// Pushes the corner vertex (or bevel pair) between two offset segments.
fn push_corner(
    raw: &mut Vec<Point2>,
    seg_prev: &(Point2, Point2),
    seg_next: &(Point2, Point2),
    dir_prev: &Vector2,
    dir_next: &Vector2,
    line_corner: &Point2,
    distance: f64,
) -> Result<()> {
    let cos_angle = dir_prev.dot(dir_next);
    if cos_angle < REVERSAL_COS {
        return Err(GeometryError::Degenerate(format!(
            "line folds back on itself at ({}, {})",
            line_corner.x, line_corner.y
        ))
        .into());
    }

    let Some((t, _)) = line_line_intersect_2d(&seg_prev.1, dir_prev, &seg_next.0, dir_next) else {
        // Collinear continuation: both offsets meet at the shifted corner.
        raw.push(seg_prev.1);
        return Ok(());
    };

    let corner = seg_prev.1 + dir_prev * t;
    let limit = MITER_LIMIT * distance.abs();
    if (corner - line_corner).norm_squared() > limit * limit {
        raw.push(seg_prev.1);
        raw.push(seg_next.0);
    } else {
        raw.push(corner);
    }
    Ok(())
}
